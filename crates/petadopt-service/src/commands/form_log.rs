//! Log-safe view of a submitted form

use std::collections::BTreeMap;
use std::fmt;

use petadopt_core::{EntityKind, FormFields};
use petadopt_core_types::Sensitive;

/// Adopter columns holding personal data
const PERSONAL_FIELDS: &[&str] = &["Contact", "Address"];

/// Debug-formats a form with personal fields redacted
pub struct LoggedForm<'a> {
    kind: EntityKind,
    form: &'a FormFields,
}

impl<'a> LoggedForm<'a> {
    pub fn new(kind: EntityKind, form: &'a FormFields) -> Self {
        Self { kind, form }
    }

    fn is_personal(&self, field: &str) -> bool {
        self.kind == EntityKind::Adopter && PERSONAL_FIELDS.contains(&field)
    }
}

impl fmt::Debug for LoggedForm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only declared columns are echoed, sorted for stable output
        let mut map = f.debug_map();
        let known: BTreeMap<&str, &str> = self
            .kind
            .columns()
            .iter()
            .filter_map(|column| self.form.get(column).map(|value| (*column, value)))
            .collect();
        for (field, value) in known {
            if self.is_personal(field) {
                map.entry(&field, &Sensitive::new(value));
            } else {
                map.entry(&field, &value);
            }
        }
        map.finish()
    }
}
