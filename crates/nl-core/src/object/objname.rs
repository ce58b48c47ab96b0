//! Item descriptions for messages

use super::catalog::type_name;
use super::{Item, ItemKind};
use crate::magic::scroll_data::{FlavorCodebook, ScrollVariant};

fn article(word: &str) -> &'static str {
    match word.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

fn base_name(item: &Item, known: bool, codebook: &FlavorCodebook, plural: bool) -> String {
    let noun = |singular: &str| {
        if plural {
            format!("{singular}s")
        } else {
            singular.to_string()
        }
    };

    match item.kind {
        ItemKind::Scroll => {
            let scrolls = noun("scroll");
            match ScrollVariant::from_item_variant(item.variant) {
                Some(ScrollVariant::None) | None => scrolls,
                Some(variant) if known => format!("{scrolls} of {}", variant.name()),
                Some(variant) => format!("{scrolls} labeled \"{}\"", codebook.flavor(variant)),
            }
        }
        ItemKind::Potion | ItemKind::Amulet => {
            let head = noun(&item.kind.to_string());
            if known {
                format!("{head} of {}", type_name(item.kind, item.variant))
            } else {
                format!("unknown {head}")
            }
        }
        ItemKind::Book => {
            let head = noun("book");
            if known {
                format!("{head} of {}", type_name(item.kind, item.variant))
            } else {
                format!("unknown {head}")
            }
        }
        _ => {
            let name = item.name.clone().unwrap_or_else(|| item.kind.to_string());
            let name = noun(&name);
            if item.bonus_known && item.kind.is_optimizable() {
                format!("{:+} {name}", item.bonus)
            } else {
                name
            }
        }
    }
}

/// Describe an item, e.g. `a blessed scroll of identify` or
/// `2 scrolls labeled "Chadosia"`
pub fn describe(item: &Item, known: bool, codebook: &FlavorCodebook) -> String {
    let plural = item.count > 1;
    let mut desc = String::new();
    if item.blessed_known {
        desc.push_str(if item.blessed {
            "blessed "
        } else if item.cursed {
            "cursed "
        } else {
            "uncursed "
        });
    }
    desc.push_str(&base_name(item, known, codebook, plural));

    if plural {
        format!("{} {desc}", item.count)
    } else {
        format!("{} {desc}", article(&desc))
    }
}

/// Describe without the leading article or count
pub fn describe_bare(item: &Item, known: bool, codebook: &FlavorCodebook) -> String {
    base_name(item, known, codebook, false)
}

/// Upper-case the first letter
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ItemId;

    fn scroll(variant: ScrollVariant) -> Item {
        Item::new(ItemId(1), ItemKind::Scroll, variant as u8)
    }

    #[test]
    fn test_unknown_scroll_shows_flavor() {
        let book = FlavorCodebook::identity();
        let desc = describe(&scroll(ScrollVariant::EnchantArmour), false, &book);
        assert_eq!(desc, "a scroll labeled \"Ssyliir Wyleeum\"");
    }

    #[test]
    fn test_known_scroll_with_status() {
        let book = FlavorCodebook::identity();
        let mut item = scroll(ScrollVariant::Identify).blessed();
        item.blessed_known = true;
        assert_eq!(describe(&item, true, &book), "a blessed scroll of identify");

        let mut item = scroll(ScrollVariant::Identify);
        item.blessed_known = true;
        item.count = 3;
        assert_eq!(describe(&item, true, &book), "3 uncursed scrolls of identify");
    }

    #[test]
    fn test_articles() {
        let book = FlavorCodebook::identity();
        let mut armour = Item::new(ItemId(2), ItemKind::Armour, 0).with_name("elven chain");
        assert_eq!(describe(&armour, true, &book), "an elven chain");
        armour.bonus_known = true;
        armour.bonus = 2;
        assert_eq!(describe(&armour, true, &book), "a +2 elven chain");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("a cursed ring"), "A cursed ring");
        assert_eq!(capitalize(""), "");
    }
}
