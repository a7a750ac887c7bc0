//! Card Input Mask
//!
//! Keystroke formatting for the card number, expiry and CVV inputs of a
//! payment form. Handlers are registered against elements the caller passes
//! in, so nothing here reaches for a global `document`.

mod mask;

pub use mask::{
    detect_brand, format_card_number, format_cvv, format_expiry, strip_trailing_separator,
    CardBrand, MaskedField,
};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlImageElement, HtmlInputElement, KeyboardEvent};

/// Element ids of the payment form
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardFormIds<'a> {
    pub number: &'a str,
    pub logo: &'a str,
    pub expiry: &'a str,
    pub cvv: &'a str,
}

impl Default for CardFormIds<'static> {
    fn default() -> Self {
        Self {
            number: "card-number",
            logo: "card-logo",
            expiry: "expiry",
            cvv: "cvv",
        }
    }
}

/// The four payment form elements the mask drives
#[derive(Clone, Debug)]
pub struct CardFormElements {
    pub number: HtmlInputElement,
    pub logo: HtmlImageElement,
    pub expiry: HtmlInputElement,
    pub cvv: HtmlInputElement,
}

impl CardFormElements {
    /// Look the elements up by id.
    ///
    /// Fails with the first id that is absent or has the wrong element type.
    pub fn from_document(doc: &Document, ids: &CardFormIds<'_>) -> Result<Self, String> {
        Ok(Self {
            number: lookup(doc, ids.number)?,
            logo: lookup(doc, ids.logo)?,
            expiry: lookup(doc, ids.expiry)?,
            cvv: lookup(doc, ids.cvv)?,
        })
    }
}

fn lookup<T: JsCast>(doc: &Document, id: &str) -> Result<T, String> {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| id.to_string())
}

/// Show the logo for `brand`, or hide it
pub fn show_brand_logo(logo: &HtmlImageElement, brand: Option<CardBrand>, logo_prefix: &str) {
    let style = logo.style();
    match brand {
        Some(brand) => {
            logo.set_src(&format!("{}{}", logo_prefix, brand.logo_file()));
            let _ = style.set_property("display", "block");
        }
        None => {
            logo.set_src("");
            let _ = style.set_property("display", "none");
        }
    }
}

/// Register `input` and backspace handlers applying `field`'s mask.
///
/// `after_format` runs with the new value after every `input` event.
pub fn bind_masked_input<F>(input: &HtmlInputElement, field: MaskedField, after_format: F)
where
    F: Fn(&str) + 'static,
{
    let target = input.clone();
    let on_input = Closure::<dyn FnMut(Event)>::new(move |_ev: Event| {
        let formatted = field.apply(&target.value());
        target.set_value(&formatted);
        after_format(&formatted);
    });
    let _ = input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref());
    on_input.forget();

    let Some(separator) = field.separator() else {
        return;
    };

    let target = input.clone();
    let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
        if ev.key() != "Backspace" {
            return;
        }
        if let Some(trimmed) = strip_trailing_separator(&target.value(), separator) {
            target.set_value(&trimmed);
        }
    });
    let _ = input.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}

/// Wire all three fields and the brand logo.
///
/// Values already in the fields (e.g. saved card details) are formatted
/// immediately so the page starts in a masked state.
pub fn bind_card_form(elements: &CardFormElements, logo_prefix: &str) {
    for (input, field) in [
        (&elements.number, MaskedField::CardNumber),
        (&elements.expiry, MaskedField::Expiry),
        (&elements.cvv, MaskedField::Cvv),
    ] {
        input.set_value(&field.apply(&input.value()));
    }
    show_brand_logo(&elements.logo, detect_brand(&elements.number.value()), logo_prefix);

    let logo = elements.logo.clone();
    let prefix = logo_prefix.to_string();
    bind_masked_input(&elements.number, MaskedField::CardNumber, move |value| {
        show_brand_logo(&logo, detect_brand(value), &prefix);
    });
    bind_masked_input(&elements.expiry, MaskedField::Expiry, |_| {});
    bind_masked_input(&elements.cvv, MaskedField::Cvv, |_| {});
}
