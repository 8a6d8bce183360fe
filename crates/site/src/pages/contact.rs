use content_model::ContactStrings;
use leptos::*;
use leptos_meta::Title;
use platform_web::ContactRequest;

use crate::{hooks::use_ui_strings, runtime::use_site_runtime};

/// Contact-form lifecycle. Errors stay on the page as a status line; nothing bubbles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmitStatus {
    /// Status line for the current state, when one should be shown.
    pub(crate) fn status_text(self, strings: &ContactStrings) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Sending => Some(strings.sending.clone()),
            Self::Success => Some(strings.success.clone()),
            Self::Error => Some(strings.error.clone()),
        }
    }

    pub(crate) fn is_sending(self) -> bool {
        self == Self::Sending
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let runtime = use_site_runtime();
    let strings = use_ui_strings();

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let message = create_rw_signal(String::new());
    let status = create_rw_signal(SubmitStatus::Idle);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_sending() {
            return;
        }
        status.set(SubmitStatus::Sending);

        let request = ContactRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
            // The CAPTCHA flow is an external collaborator; no token without it.
            captcha_token: None,
        };
        let services = runtime.services.get_value();
        spawn_local(async move {
            match services.contact.submit(&request).await {
                Ok(()) => {
                    status.set(SubmitStatus::Success);
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                }
                Err(err) => {
                    logging::warn!("contact submission failed: {err}");
                    status.set(SubmitStatus::Error);
                }
            }
        });
    };

    view! {
        <div class="page page-contact">
            <Title text=move || strings.get().contact.title />
            <h1 class="page-title">{move || strings.get().contact.title}</h1>
            <form class="contact-form" on:submit=on_submit>
                <label class="contact-field">
                    <span>{move || strings.get().contact.name_label}</span>
                    <input
                        type="text"
                        name="name"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="contact-field">
                    <span>{move || strings.get().contact.email_label}</span>
                    <input
                        type="email"
                        name="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="contact-field">
                    <span>{move || strings.get().contact.message_label}</span>
                    <textarea
                        name="message"
                        rows="6"
                        required
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button
                    type="submit"
                    class="contact-submit"
                    disabled=move || status.get().is_sending()
                >
                    {move || strings.get().contact.send}
                </button>
                {move || {
                    status
                        .get()
                        .status_text(&strings.get().contact)
                        .map(|text| view! { <p class="contact-status" data-status=status_token(status.get())>{text}</p> })
                }}
            </form>
        </div>
    }
}

fn status_token(status: SubmitStatus) -> &'static str {
    match status {
        SubmitStatus::Idle => "idle",
        SubmitStatus::Sending => "sending",
        SubmitStatus::Success => "success",
        SubmitStatus::Error => "error",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn idle_state_shows_no_status_line() {
        let strings = ContactStrings::default();
        assert_eq!(SubmitStatus::Idle.status_text(&strings), None);
    }

    #[test]
    fn non_idle_states_surface_their_localized_message() {
        let strings = ContactStrings::default();
        assert_eq!(
            SubmitStatus::Sending.status_text(&strings),
            Some(strings.sending.clone())
        );
        assert_eq!(
            SubmitStatus::Success.status_text(&strings),
            Some(strings.success.clone())
        );
        assert_eq!(
            SubmitStatus::Error.status_text(&strings),
            Some(strings.error.clone())
        );
    }

    #[test]
    fn only_sending_blocks_resubmission() {
        assert!(SubmitStatus::Sending.is_sending());
        assert!(!SubmitStatus::Idle.is_sending());
        assert!(!SubmitStatus::Success.is_sending());
        assert!(!SubmitStatus::Error.is_sending());
    }
}
