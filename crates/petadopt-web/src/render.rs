//! HTML rendering
//!
//! Pages are plain strings built from a shared layout. Every value taken from
//! a record passes through [`escape`].

use petadopt_core::model::FieldType;
use petadopt_core::{Adopter, Adoption, Entity, EntityKind, Payment, Pet};

/// A record that can be shown as one table row
pub trait Tabular: Entity {
    /// Cell text in column order, key first
    fn cells(&self) -> Vec<String>;
}

impl Tabular for Pet {
    fn cells(&self) -> Vec<String> {
        vec![
            self.pet_id.clone(),
            self.pet_name.clone(),
            self.breed.clone(),
            self.age.to_string(),
            self.health_status.clone(),
        ]
    }
}

impl Tabular for Adopter {
    fn cells(&self) -> Vec<String> {
        vec![
            self.adopter_id.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.contact.clone(),
            self.address.clone(),
            self.city.clone(),
            self.state.clone(),
            self.country.clone(),
        ]
    }
}

impl Tabular for Adoption {
    fn cells(&self) -> Vec<String> {
        vec![
            self.adoption_id.to_string(),
            self.pet_id.clone(),
            self.adopter_id.clone(),
            self.adoption_date.clone(),
        ]
    }
}

impl Tabular for Payment {
    fn cells(&self) -> Vec<String> {
        vec![
            self.payment_id.to_string(),
            self.adoption_id.to_string(),
            self.amount.to_string(),
            self.payment_date.clone(),
        ]
    }
}

/// Escape text for element content and quoted attribute values
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a key for use as one path segment
pub fn encode_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

fn plural(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Pet => "Pets",
        EntityKind::Adopter => "Adopters",
        EntityKind::Adoption => "Adoptions",
        EntityKind::Payment => "Payments",
    }
}

/// Wrap page content in the shared layout
pub fn layout(title: &str, content: &str) -> String {
    let mut output = String::new();
    output.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    output.push_str(&format!(
        "<meta charset=\"utf-8\">\n<title>{} - Pet Adoption System</title>\n",
        escape(title)
    ));
    output.push_str("</head>\n<body>\n<h2>Pet Adoption Management</h2>\n<nav>\n");
    for kind in EntityKind::ALL {
        output.push_str(&format!(
            "  <a href=\"{}\">{}</a>\n",
            kind.list_path(),
            plural(kind)
        ));
    }
    output.push_str("</nav>\n<main>\n");
    output.push_str(content);
    output.push_str("</main>\n</body>\n</html>\n");
    output
}

/// Landing page
pub fn home_page() -> String {
    let mut content = String::from("<h4>Welcome</h4>\n<ul>\n");
    for kind in EntityKind::ALL {
        content.push_str(&format!(
            "  <li><a href=\"{}\">Manage {}</a></li>\n",
            kind.list_path(),
            plural(kind).to_lowercase()
        ));
    }
    content.push_str("</ul>\n");
    layout("Home", &content)
}

fn input(kind: EntityKind, field: &str, value: Option<&str>) -> String {
    let type_attr = match kind.field_type(field) {
        Some(FieldType::Integer) => " type=\"number\"",
        Some(FieldType::Decimal) => " type=\"number\" step=\"any\"",
        _ => "",
    };
    let value_attr = value
        .map(|v| format!(" value=\"{}\"", escape(v)))
        .unwrap_or_default();
    format!(
        "  <label>{field} <input name=\"{field}\"{type_attr}{value_attr} required></label><br>\n"
    )
}

/// Listing of every record plus the add form
pub fn list_page<R: Tabular>(records: &[R]) -> String {
    let kind = R::KIND;
    let mut content = String::new();

    content.push_str(&format!("<h4>All {}</h4>\n<table>\n<tr>", plural(kind)));
    for column in kind.columns() {
        content.push_str(&format!("<th>{}</th>", column));
    }
    content.push_str("<th>Actions</th></tr>\n");

    for record in records {
        content.push_str("<tr>");
        for cell in record.cells() {
            content.push_str(&format!("<td>{}</td>", escape(&cell)));
        }
        let key = encode_segment(&record.key().to_string());
        content.push_str(&format!(
            "<td><a href=\"/edit_{slug}/{key}\">Edit</a> <a href=\"/delete_{slug}/{key}\">Delete</a></td></tr>\n",
            slug = kind.slug(),
        ));
    }
    content.push_str("</table>\n");

    content.push_str(&format!(
        "<h5>Add New {}</h5>\n<form method=\"POST\" action=\"/add_{}\">\n",
        kind.name(),
        kind.slug()
    ));
    for field in kind.create_fields() {
        content.push_str(&input(kind, field, None));
    }
    content.push_str(&format!(
        "  <button>Add {}</button>\n</form>\n",
        kind.name()
    ));

    layout(plural(kind), &content)
}

/// Edit form prefilled with the record's current values
pub fn edit_page<R: Tabular>(record: &R) -> String {
    let kind = R::KIND;
    let cells = record.cells();
    let mut content = format!(
        "<h4>Edit {} {}</h4>\n<form method=\"POST\">\n",
        kind.name(),
        escape(&record.key().to_string())
    );
    // cells[0] is the key, which is not editable
    for (field, value) in kind.editable_fields().iter().zip(cells.iter().skip(1)) {
        content.push_str(&input(kind, field, Some(value)));
    }
    content.push_str(&format!(
        "  <button>Update {}</button>\n</form>\n",
        kind.name()
    ));
    layout(&format!("Edit {}", kind.name()), &content)
}
