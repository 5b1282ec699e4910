//! Attribute serialization.

use gesso_carton::{escape_html_attr, is_safe_attr_name};

use crate::{AttrError, AttrValue, AttributeSet};

/// Append ` name="value"` pairs for every rendered attribute of a flattened set.
///
/// `Nil`, `false` and empty token lists are skipped; `true` writes a bare
/// attribute name. A namespace group that was never flattened is written as
/// JSON.
pub fn write_attrs(out: &mut String, attrs: &AttributeSet) -> Result<(), AttrError> {
    for (name, value) in attrs.iter() {
        if !is_safe_attr_name(name) {
            return Err(AttrError::UnsafeAttrName {
                name: name.to_string(),
            });
        }
        let Some(text) = value.to_attr_string() else {
            continue;
        };
        out.push(' ');
        out.push_str(name);
        if matches!(value, AttrValue::Bool(true)) {
            continue;
        }
        out.push_str("=\"");
        out.push_str(&escape_html_attr(&text));
        out.push('"');
    }
    Ok(())
}

/// Serialize a flattened set into an attribute string with a leading space.
///
/// ```
/// use gesso_relief::{render_attrs, AttributeSet};
///
/// let attrs = AttributeSet::new().with("type", "button").with("disabled", true);
/// assert_eq!(render_attrs(&attrs).unwrap(), r#" type="button" disabled"#);
/// ```
pub fn render_attrs(attrs: &AttributeSet) -> Result<String, AttrError> {
    let mut out = String::new();
    write_attrs(&mut out, attrs)?;
    Ok(out)
}
