//! Form submission guard

use tracing::{debug, warn};

use crate::behaviors::Installation;
use crate::error::Result;
use crate::page::{EventKind, Page};

/// Block submission of invalid forms and mark every attempt
///
/// On each submit the form's native validity is evaluated fresh. An
/// invalid form has its default action prevented and propagation stopped.
/// `validated_class` is added either way so validation styling shows from
/// the first attempt on. If the host cannot evaluate validity the
/// submission is left to the server.
///
/// # Errors
///
/// Returns an error if the forms cannot be queried or a listener cannot be
/// registered
pub fn install<P: Page>(page: &P, selector: &str, validated_class: &str) -> Result<Installation> {
    let forms = page.query_all(selector)?;

    forms.iter().try_for_each(|form| {
        let handler_page = page.clone();
        let handler_form = form.clone();
        let validated_class = validated_class.to_string();

        page.listen(
            form,
            EventKind::Submit,
            Box::new(move |event| {
                let valid = handler_page
                    .check_validity(&handler_form)
                    .unwrap_or_else(|e| {
                        warn!(error = %e, "validity check failed, submission allowed");
                        true
                    });

                if !valid {
                    debug!("invalid form submission blocked");
                    event.prevent_default();
                    event.stop_propagation();
                }

                if let Err(e) = handler_page.add_class(&handler_form, &validated_class) {
                    warn!(error = %e, "failed to mark form as validated");
                }
            }),
        )
    })?;

    Ok(Installation::Bound(forms.len()))
}
