use lazy_static::lazy_static;
use regex::Regex;

pub const NO_TITLE: &str = "No Title";
pub const NO_PRICE: &str = "No Price";
pub const NO_LINK: &str = "No link found";

lazy_static! {
    // thousands are split with '.', cents with ','; e.g. "€ 1.250,00" or "€ 5,-"
    static ref RE_EUROS: Regex = Regex::new(r"€\s*(\d{1,3}(?:\.\d{3})+|\d+)(?:,(\d{1,2}))?")
        .expect("A Regex of a euro amount after the '€'.");
}

/// One search result from the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub title: String,

    // kept as shown on the site; "Bieden" and "Gratis" are common
    pub price: String,

    // can be empty
    pub description: String,

    // absolute url or NO_LINK
    pub link: String,
}

impl Listing {
    pub fn has_link(&self) -> bool {
        self.link != NO_LINK
    }

    /// The price in euros, if the displayed price is an amount.
    pub fn price_value(&self) -> Option<f32> {
        if self.price.to_lowercase().contains("gratis") {
            return Some(0.0);
        }
        let captures = RE_EUROS.captures(&self.price)?;
        let euros = captures[1].split('.').collect::<String>();
        let cents = captures.get(2).map_or("0", |cents| cents.as_str());
        format!("{euros}.{cents}").parse::<f32>().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(price: &str) -> Listing {
        Listing {
            title: "Gesjaakt".to_string(),
            price: price.to_string(),
            description: String::new(),
            link: NO_LINK.to_string(),
        }
    }

    #[test]
    fn price_with_cents() {
        assert_eq!(priced("€ 12,50").price_value(), Some(12.5));
    }

    #[test]
    fn price_with_thousands_separator() {
        assert_eq!(priced("€ 1.250,00").price_value(), Some(1250.0));
    }

    #[test]
    fn price_without_cents() {
        assert_eq!(priced("€ 5,-").price_value(), Some(5.0));
        assert_eq!(priced("€7").price_value(), Some(7.0));
    }

    #[test]
    fn free_and_unpriced() {
        assert_eq!(priced("Gratis").price_value(), Some(0.0));
        assert_eq!(priced("Bieden").price_value(), None);
        assert_eq!(priced(NO_PRICE).price_value(), None);
    }

    #[test]
    fn sentinel_link_is_not_a_link() {
        assert!(!priced("Bieden").has_link());
    }
}
