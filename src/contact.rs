//! Contact form wiring and the HTTP relay.
//!
//! The form posts to a same-origin proxy that owns the email-relay
//! credentials; nothing secret is shipped to the browser.

use crate::constants::*;
use crate::dom;
use folio_core::{
    submit, ContactForm, Field, Relay, RelayError, SiteConfig, SubmissionStatus, TemplateParams,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct ProxyRelay {
    endpoint: String,
}

impl ProxyRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

fn network_err(e: JsValue) -> RelayError {
    RelayError::Network(format!("{:?}", e))
}

impl Relay for ProxyRelay {
    async fn send(&self, params: &TemplateParams) -> Result<(), RelayError> {
        let body = serde_json::to_string(params).map_err(|e| RelayError::Encode(e.to_string()))?;

        let headers = web::Headers::new().map_err(network_err)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(network_err)?;
        let init = web::RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));
        let request =
            web::Request::new_with_str_and_init(&self.endpoint, &init).map_err(network_err)?;

        let window = web::window().ok_or_else(|| RelayError::Network("no window".to_string()))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_err)?
            .dyn_into::<web::Response>()
            .map_err(network_err)?;
        if response.ok() {
            Ok(())
        } else {
            Err(RelayError::Rejected {
                status: response.status(),
            })
        }
    }
}

struct FormElements {
    form: web::Element,
    name: web::HtmlInputElement,
    email: web::HtmlInputElement,
    message: web::HtmlTextAreaElement,
    submit: Option<web::HtmlButtonElement>,
    status: Option<web::Element>,
}

impl FormElements {
    fn find(document: &web::Document) -> Option<Self> {
        let input = |id: &str| {
            document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        };
        Some(Self {
            form: document.get_element_by_id(CONTACT_FORM_ID)?,
            name: input(CONTACT_NAME_ID)?,
            email: input(CONTACT_EMAIL_ID)?,
            message: document
                .get_element_by_id(CONTACT_MESSAGE_ID)
                .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())?,
            submit: document
                .get_element_by_id(CONTACT_SUBMIT_ID)
                .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok()),
            status: document.get_element_by_id(CONTACT_STATUS_ID),
        })
    }

    fn read_into(&self, form: &mut ContactForm) {
        form.set_field(Field::Name, self.name.value());
        form.set_field(Field::Email, self.email.value());
        form.set_field(Field::Message, self.message.value());
    }

    /// Pushes the form state back into the DOM.
    fn render(&self, form: &ContactForm) {
        let status = form.status();
        if status == SubmissionStatus::Success {
            let fields = form.fields();
            self.name.set_value(&fields.name);
            self.email.set_value(&fields.email);
            self.message.set_value(&fields.message);
        }
        if let Some(button) = &self.submit {
            button.set_disabled(status == SubmissionStatus::Sending);
        }
        _ = self.form.set_attribute(CONTACT_STATUS_ATTR, status.as_str());
        self.show_message(status.message());
    }

    fn show_message(&self, text: &str) {
        if let Some(el) = &self.status {
            el.set_text_content(Some(text));
        }
    }
}

pub fn wire_contact_form(document: &web::Document, config: &SiteConfig) {
    let Some(elements) = FormElements::find(document) else {
        log::warn!("[contact] form elements missing; contact form disabled");
        return;
    };
    let elements = Rc::new(elements);
    let form = Rc::new(RefCell::new(ContactForm::new(config.recipient_name.clone())));
    let relay = Rc::new(ProxyRelay::new(config.contact_endpoint.clone()));
    let reset_ms = config.status_reset_ms;
    elements.render(&form.borrow());

    let target = elements.form.clone();
    dom::add_listener(&target, "submit", move |ev: web::Event| {
        ev.prevent_default();
        if form.borrow().status() == SubmissionStatus::Sending {
            return;
        }
        elements.read_into(&mut form.borrow_mut());

        let form = form.clone();
        let relay = relay.clone();
        let elements = elements.clone();
        spawn_local(async move {
            let notify = |f: &ContactForm| elements.render(f);
            match submit(&form, &*relay, notify).await {
                Ok(settled) => {
                    let form = form.clone();
                    let elements = elements.clone();
                    dom::set_timeout(reset_ms, move || {
                        if form.borrow_mut().expire(settled.generation) {
                            elements.render(&form.borrow());
                        }
                    });
                }
                Err(e) => {
                    log::info!("[contact] submission rejected: {e}");
                    elements.show_message(&e.user_message());
                }
            }
        });
    });
    log::info!("[contact] form wired to {}", config.contact_endpoint);
}
