//! Contact form wiring: reads fields from the page, writes status and
//! button state back, and runs submissions as local futures.

use std::rc::Rc;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::{Page, find_in, listen};
use crate::consts::*;
use crate::contact::{ContactFields, ContactForm, Delay, FormView, SimulatedSubmitter, StatusLine, SubmitControl};
use crate::error::{MarqueeError, Result};

/// Browser timer wait.
#[derive(Debug, Clone, Copy)]
struct TimerDelay;

#[async_trait(?Send)]
impl Delay for TimerDelay {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}

struct DomFormView {
    form: HtmlFormElement,
    name: Option<Element>,
    email: Option<Element>,
    message: Option<Element>,
    status: Option<Element>,
    submit: Option<HtmlButtonElement>,
}

fn field_value(field: Option<&Element>) -> String {
    let Some(field) = field else {
        return String::new();
    };
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        field.text_content().unwrap_or_default()
    }
}

impl FormView for DomFormView {
    fn read_fields(&self) -> ContactFields {
        ContactFields {
            name: field_value(self.name.as_ref()),
            email: field_value(self.email.as_ref()),
            message: field_value(self.message.as_ref()),
        }
    }

    fn show_status(&self, line: StatusLine) {
        if let Some(status) = &self.status {
            status.set_text_content(Some(line.text));
            status.set_class_name(line.class);
        }
    }

    fn set_submit(&self, control: SubmitControl) {
        if let Some(button) = &self.submit {
            button.set_disabled(control.disabled);
            button.set_text_content(Some(control.label));
        }
    }

    fn reset_fields(&self) {
        self.form.reset();
    }
}

pub(super) fn bind(page: &Page) -> Result<()> {
    let form: HtmlFormElement =
        page.by_id(ID_CONTACT_FORM).ok_or(MarqueeError::MissingElement(ID_CONTACT_FORM))?;

    let view = Rc::new(DomFormView {
        name: find_in(&form, SEL_FIELD_NAME)?,
        email: find_in(&form, SEL_FIELD_EMAIL)?,
        message: find_in(&form, SEL_FIELD_MESSAGE)?,
        status: page.by_id(ID_FORM_STATUS),
        submit: find_in(&form, SEL_SUBMIT)?,
        form: form.clone(),
    });
    if view.status.is_none() {
        log::debug!("contact form has no #{ID_FORM_STATUS}; status messages are dropped");
    }

    let controller = Rc::new(ContactForm::new(
        SimulatedSubmitter::new(TimerDelay, page.config.submit_latency_ms),
        TimerDelay,
        page.config.status_clear_ms,
    ));

    listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let (controller, view) = (Rc::clone(&controller), Rc::clone(&view));
        wasm_bindgen_futures::spawn_local(async move {
            let status = controller.submit(view.as_ref()).await;
            log::debug!("contact form settled: {status:?}");
        });
        Ok(())
    })
}
