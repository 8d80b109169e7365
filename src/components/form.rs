//! Form components.
//!
//! Selects here double as navigation: each option may carry the href it
//! leads to, and choosing it replaces the current location with that href.
//! Without scripting, the surrounding GET form submits the plain values.

use maud::{html, Markup, Render};

/// Inline handler that follows the chosen option's `data-href`.
const NAVIGATE_ON_CHANGE: &str =
    "var h=this.options[this.selectedIndex].dataset.href;if(h){location.replace(h);}";

/// A GET form wrapping navigation selects.
#[derive(Debug)]
pub struct Form<'a> {
    pub action: &'a str,
    pub class: Option<&'a str>,
    /// Label of the submit button shown when scripting is off.
    pub fallback_submit: Option<&'a str>,
}

impl<'a> Form<'a> {
    #[must_use]
    pub fn get(action: &'a str) -> Self {
        Self {
            action,
            class: None,
            fallback_submit: None,
        }
    }

    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    /// Add a `<noscript>` submit button.
    #[must_use]
    pub fn fallback_submit(mut self, label: &'a str) -> Self {
        self.fallback_submit = Some(label);
        self
    }

    /// Render the form around `content`.
    #[must_use]
    pub fn render(&self, content: Markup) -> Markup {
        html! {
            form method="get" action=(self.action) class=[self.class] {
                (content)
                @if let Some(label) = self.fallback_submit {
                    noscript {
                        button type="submit" { (label) }
                    }
                }
            }
        }
    }
}

/// A label element for form inputs.
#[derive(Debug)]
pub struct Label<'a> {
    /// The ID of the input this label is for
    pub r#for: &'a str,
    pub text: &'a str,
}

impl<'a> Label<'a> {
    #[must_use]
    pub fn new(r#for: &'a str, text: &'a str) -> Self {
        Self { r#for, text }
    }
}

impl Render for Label<'_> {
    fn render(&self) -> Markup {
        html! {
            label for=(self.r#for) { (self.text) }
        }
    }
}

/// A select dropdown.
#[derive(Debug)]
pub struct Select<'a> {
    /// Select name attribute
    pub name: &'a str,
    pub options: Vec<SelectOption>,
    /// Currently selected value
    pub selected: Option<String>,
    pub id: Option<&'a str>,
}

impl<'a> Select<'a> {
    /// Create a new select with the given name.
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            options: Vec::new(),
            selected: None,
            id: None,
        }
    }

    /// Add a single option.
    #[must_use]
    pub fn option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    /// Set the selected value.
    #[must_use]
    pub fn selected(mut self, selected: impl Into<String>) -> Self {
        self.selected = Some(selected.into());
        self
    }

    #[must_use]
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    fn navigates(&self) -> bool {
        self.options.iter().any(|opt| opt.href.is_some())
    }
}

impl Render for Select<'_> {
    fn render(&self) -> Markup {
        let onchange = self.navigates().then_some(NAVIGATE_ON_CHANGE);
        html! {
            select
                name=(self.name)
                id=[self.id]
                onchange=[onchange]
            {
                @for opt in &self.options {
                    option
                        value=(opt.value)
                        data-href=[opt.href.as_deref()]
                        selected[self.selected.as_deref() == Some(opt.value.as_str())]
                    {
                        (opt.label)
                    }
                }
            }
        }
    }
}

/// An option for a select element.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    /// Option display label
    pub label: String,
    /// Where choosing this option navigates to.
    pub href: Option<String>,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            href: None,
        }
    }

    #[must_use]
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}
