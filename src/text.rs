//! Text utilities for podcrab
//!
//! This module provides functions for cleaning up episode descriptions and
//! building display strings: HTML stripping, entity decoding, first-line
//! extraction and `{object.attr}` template substitution.

use log::{debug, warn};
use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new("<[^>]*>").unwrap());

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\.([^}]+)\}").unwrap());

/// Named HTML entities mapped to their characters (HTML 4 Latin-1 set plus
/// the common symbol and punctuation entities seen in feed descriptions)
const NAMED_ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{a0}'),
    ("iexcl", '¡'),
    ("cent", '¢'),
    ("pound", '£'),
    ("curren", '¤'),
    ("yen", '¥'),
    ("brvbar", '¦'),
    ("sect", '§'),
    ("uml", '¨'),
    ("copy", '©'),
    ("ordf", 'ª'),
    ("laquo", '«'),
    ("not", '¬'),
    ("shy", '\u{ad}'),
    ("reg", '®'),
    ("macr", '¯'),
    ("deg", '°'),
    ("plusmn", '±'),
    ("sup2", '²'),
    ("sup3", '³'),
    ("acute", '´'),
    ("micro", 'µ'),
    ("para", '¶'),
    ("middot", '·'),
    ("cedil", '¸'),
    ("sup1", '¹'),
    ("ordm", 'º'),
    ("raquo", '»'),
    ("frac14", '¼'),
    ("frac12", '½'),
    ("frac34", '¾'),
    ("iquest", '¿'),
    ("Agrave", 'À'),
    ("Aacute", 'Á'),
    ("Acirc", 'Â'),
    ("Atilde", 'Ã'),
    ("Auml", 'Ä'),
    ("Aring", 'Å'),
    ("AElig", 'Æ'),
    ("Ccedil", 'Ç'),
    ("Egrave", 'È'),
    ("Eacute", 'É'),
    ("Ecirc", 'Ê'),
    ("Euml", 'Ë'),
    ("Igrave", 'Ì'),
    ("Iacute", 'Í'),
    ("Icirc", 'Î'),
    ("Iuml", 'Ï'),
    ("ETH", 'Ð'),
    ("Ntilde", 'Ñ'),
    ("Ograve", 'Ò'),
    ("Oacute", 'Ó'),
    ("Ocirc", 'Ô'),
    ("Otilde", 'Õ'),
    ("Ouml", 'Ö'),
    ("times", '×'),
    ("Oslash", 'Ø'),
    ("Ugrave", 'Ù'),
    ("Uacute", 'Ú'),
    ("Ucirc", 'Û'),
    ("Uuml", 'Ü'),
    ("Yacute", 'Ý'),
    ("THORN", 'Þ'),
    ("szlig", 'ß'),
    ("agrave", 'à'),
    ("aacute", 'á'),
    ("acirc", 'â'),
    ("atilde", 'ã'),
    ("auml", 'ä'),
    ("aring", 'å'),
    ("aelig", 'æ'),
    ("ccedil", 'ç'),
    ("egrave", 'è'),
    ("eacute", 'é'),
    ("ecirc", 'ê'),
    ("euml", 'ë'),
    ("igrave", 'ì'),
    ("iacute", 'í'),
    ("icirc", 'î'),
    ("iuml", 'ï'),
    ("eth", 'ð'),
    ("ntilde", 'ñ'),
    ("ograve", 'ò'),
    ("oacute", 'ó'),
    ("ocirc", 'ô'),
    ("otilde", 'õ'),
    ("ouml", 'ö'),
    ("divide", '÷'),
    ("oslash", 'ø'),
    ("ugrave", 'ù'),
    ("uacute", 'ú'),
    ("ucirc", 'û'),
    ("uuml", 'ü'),
    ("yacute", 'ý'),
    ("thorn", 'þ'),
    ("yuml", 'ÿ'),
    ("OElig", 'Œ'),
    ("oelig", 'œ'),
    ("Scaron", 'Š'),
    ("scaron", 'š'),
    ("Yuml", 'Ÿ'),
    ("fnof", 'ƒ'),
    ("ndash", '–'),
    ("mdash", '—'),
    ("lsquo", '\u{2018}'),
    ("rsquo", '\u{2019}'),
    ("sbquo", '‚'),
    ("ldquo", '\u{201c}'),
    ("rdquo", '\u{201d}'),
    ("bdquo", '„'),
    ("dagger", '†'),
    ("Dagger", '‡'),
    ("bull", '•'),
    ("hellip", '…'),
    ("permil", '‰'),
    ("prime", '′'),
    ("Prime", '″'),
    ("lsaquo", '‹'),
    ("rsaquo", '›'),
    ("frasl", '⁄'),
    ("euro", '€'),
    ("trade", '™'),
    ("minus", '−'),
];

/// Removes HTML tags from a string and decodes its entities
///
/// Tags are stripped and numeric (decimal and hexadecimal) as well as named
/// entities are replaced with the corresponding character, so HTML episode
/// descriptions can be displayed in a simple text view.
///
/// # Arguments
/// * `html` - The HTML string to clean up
///
/// # Returns
/// Returns the plain-text rendition of the input
pub fn remove_html_tags(html: &str) -> String {
    let stripped = TAG_RE.replace_all(html, "");
    decode_entities(&stripped)
}

/// Decodes numeric and named HTML entities in a string
///
/// Sequences that do not form a known entity are kept verbatim.
pub fn decode_entities(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        result.push_str(&rest[..start]);
        rest = &rest[start..];

        match rest[1..].find(';').map(|end| &rest[1..end + 1]) {
            Some(body) if !body.is_empty() && body.len() <= 10 => {
                match decode_entity_body(body) {
                    Some(decoded) => {
                        result.push(decoded);
                        rest = &rest[body.len() + 2..];
                    }
                    None => {
                        result.push('&');
                        rest = &rest[1..];
                    }
                }
            }
            _ => {
                result.push('&');
                rest = &rest[1..];
            }
        }
    }

    result.push_str(rest);
    result
}

/// Decodes a single entity body (the part between `&` and `;`)
fn decode_entity_body(body: &str) -> Option<char> {
    if let Some(digits) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        return u32::from_str_radix(digits, 16).ok().and_then(char::from_u32);
    }
    if let Some(digits) = body.strip_prefix('#') {
        return digits.parse::<u32>().ok().and_then(char::from_u32);
    }
    NAMED_ENTITIES
        .iter()
        .find(|(name, _)| *name == body)
        .map(|(_, character)| *character)
}

/// Returns only the first line of a string
///
/// The string is trimmed before and after the line is taken, so the result
/// carries no surrounding whitespace.
pub fn first_line(s: &str) -> String {
    s.trim().lines().next().unwrap_or("").trim().to_string()
}

/// Objects that can resolve template attributes by name
///
/// Implemented by episode and channel types so their fields can be referenced
/// from user-supplied filename templates.
pub trait TemplateVars {
    /// Resolves an attribute to its string value, or None if the attribute
    /// does not exist on this object
    fn var(&self, name: &str) -> Option<String>;
}

/// Substitutes `{object.attr}` placeholders in a template string
///
/// Each placeholder is replaced with the attribute value resolved from the
/// matching named object. Placeholders whose object is unknown or whose
/// attribute cannot be resolved are left untouched.
///
/// # Arguments
/// * `template` - The template string containing placeholders
/// * `objects` - Named objects whose attributes are available to the template
///
/// # Returns
/// Returns the template with all resolvable placeholders substituted
pub fn render_template(template: &str, objects: &[(&str, &dyn TemplateVars)]) -> String {
    let mut result = template.to_string();

    for captures in PLACEHOLDER_RE.captures_iter(template) {
        let placeholder = &captures[0];
        let object_name = &captures[1];
        let attribute = &captures[2];

        match objects.iter().find(|(name, _)| *name == object_name) {
            Some((_, vars)) => match vars.var(attribute) {
                Some(value) => result = result.replace(placeholder, &value),
                None => {
                    warn!("Could not replace attribute '{attribute}' in template '{template}'")
                }
            },
            None => debug!("No object named '{object_name}' for template '{template}'"),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Episode {
        title: String,
        podcast: String,
    }

    impl TemplateVars for Episode {
        fn var(&self, name: &str) -> Option<String> {
            match name {
                "title" => Some(self.title.clone()),
                "podcast" => Some(self.podcast.clone()),
                _ => None,
            }
        }
    }

    #[test]
    fn test_remove_html_tags() {
        assert_eq!(
            remove_html_tags("<p>Hello <b>World</b></p>"),
            "Hello World"
        );
        assert_eq!(remove_html_tags("no markup"), "no markup");
    }

    #[test]
    fn test_remove_html_tags_entities() {
        assert_eq!(remove_html_tags("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(remove_html_tags("caf&eacute;"), "café");
        assert_eq!(remove_html_tags("caf&#233;"), "café");
        assert_eq!(remove_html_tags("caf&#xE9;"), "café");
        assert_eq!(
            remove_html_tags("<i>1 &lt; 2 &amp;&amp; 3 &gt; 2</i>"),
            "1 < 2 && 3 > 2"
        );
    }

    #[test]
    fn test_decode_entities_keeps_unknown_sequences() {
        assert_eq!(decode_entities("fish &chips;"), "fish &chips;");
        assert_eq!(decode_entities("AT&T"), "AT&T");
        assert_eq!(decode_entities("trailing &"), "trailing &");
        assert_eq!(decode_entities("&#xZZ;"), "&#xZZ;");
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("  Hello World  \nSecond line"), "Hello World");
        assert_eq!(first_line("single"), "single");
        assert_eq!(first_line("\n\n  indented first  \n"), "indented first");
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn test_render_template() {
        let episode = Episode {
            title: "Hello".to_string(),
            podcast: "My Show".to_string(),
        };

        assert_eq!(
            render_template("{episode.title} World", &[("episode", &episode)]),
            "Hello World"
        );
        assert_eq!(
            render_template(
                "{episode.podcast} - {episode.title}",
                &[("episode", &episode)]
            ),
            "My Show - Hello"
        );
    }

    #[test]
    fn test_render_template_missing_attribute() {
        let episode = Episode {
            title: "Hello".to_string(),
            podcast: "My Show".to_string(),
        };

        assert_eq!(
            render_template("{episode.missing} World", &[("episode", &episode)]),
            "{episode.missing} World"
        );
    }

    #[test]
    fn test_render_template_unknown_object() {
        let episode = Episode {
            title: "Hello".to_string(),
            podcast: "My Show".to_string(),
        };

        assert_eq!(
            render_template("{channel.title}", &[("episode", &episode)]),
            "{channel.title}"
        );
    }
}
