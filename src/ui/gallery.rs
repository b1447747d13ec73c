//! Contact gallery: read-only cards over the store.

use crate::models::Contact;
use crate::store::{ContactStore, StoreSubscription};
use crate::ui::text;
use std::sync::Arc;

pub const EMPTY_GALLERY_MESSAGE: &str = "No contacts registered yet.";

/// Card grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    /// Total card width in columns, borders included
    pub card_width: usize,

    /// Cards placed side by side before wrapping
    pub cards_per_row: usize,
}

impl CardLayout {
    /// Smallest card that still shows a few characters of text.
    pub const MIN_CARD_WIDTH: usize = 12;

    fn inner_width(&self) -> usize {
        self.card_width.max(Self::MIN_CARD_WIDTH) - 4
    }
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            card_width: 28,
            cards_per_row: 3,
        }
    }
}

/// One displayed contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub email: String,
}

impl From<Contact> for Card {
    fn from(contact: Contact) -> Self {
        Self {
            name: contact.name.into_inner(),
            email: contact.email.into_inner(),
        }
    }
}

impl Card {
    /// Top border, wrapped name, wrapped e-mail, bottom border.
    fn lines(&self, layout: &CardLayout) -> Vec<String> {
        let inner = layout.inner_width();
        let border = format!("+{}+", "-".repeat(inner + 2));

        let mut lines = vec![border.clone()];
        for cell in text::wrap(&self.name, inner)
            .into_iter()
            .chain(text::wrap(&self.email, inner))
        {
            lines.push(format!("| {} |", cell));
        }
        lines.push(border);
        lines
    }

    /// Grow to `height` lines by inserting blank rows above the bottom border.
    fn pad_to(lines: &mut Vec<String>, height: usize, layout: &CardLayout) {
        let blank = format!("| {} |", text::pad("", layout.inner_width()));
        while lines.len() < height {
            lines.insert(lines.len() - 1, blank.clone());
        }
    }
}

/// Renders the store as cards, or a placeholder when it is empty.
///
/// The last rendered screen is kept and rebuilt only when the store's
/// subscription reports an append.
pub struct ContactGallery {
    store: Arc<dyn ContactStore>,
    subscription: StoreSubscription,
    layout: CardLayout,
    rendered: Option<String>,
}

impl ContactGallery {
    pub fn new(store: Arc<dyn ContactStore>, layout: CardLayout) -> Self {
        let subscription = store.subscribe();
        Self {
            store,
            subscription,
            layout,
            rendered: None,
        }
    }

    /// Cards for the current store contents, in store order.
    pub fn cards(&self) -> Vec<Card> {
        self.store.list().into_iter().map(Card::from).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Draw the gallery screen, re-reading the store if it changed.
    pub fn render(&mut self) -> &str {
        if self.rendered.is_none() || self.subscription.has_changed() {
            let revision = self.subscription.mark_seen();
            tracing::trace!(revision = revision, "Rebuilding contact gallery");
            self.rendered = Some(self.build());
        }
        self.rendered.as_deref().unwrap_or(EMPTY_GALLERY_MESSAGE)
    }

    fn build(&self) -> String {
        let cards = self.cards();
        if cards.is_empty() {
            return format!("{}\n", EMPTY_GALLERY_MESSAGE);
        }

        let per_row = self.layout.cards_per_row.max(1);
        let mut out = String::new();

        for row in cards.chunks(per_row) {
            let mut drawn: Vec<Vec<String>> =
                row.iter().map(|c| c.lines(&self.layout)).collect();
            let height = drawn.iter().map(Vec::len).max().unwrap_or(0);
            for card in &mut drawn {
                Card::pad_to(card, height, &self.layout);
            }

            for line in 0..height {
                let joined = drawn
                    .iter()
                    .map(|card| card[line].as_str())
                    .collect::<Vec<_>>()
                    .join("  ");
                out.push_str(&joined);
                out.push('\n');
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SessionStore;

    fn gallery_with(contacts: &[(&str, &str)], layout: CardLayout) -> ContactGallery {
        let store = Arc::new(SessionStore::new());
        for (name, email) in contacts {
            store.append(Contact::from_fields(name, email).unwrap());
        }
        ContactGallery::new(store, layout)
    }

    #[test]
    fn test_empty_store_renders_placeholder() {
        let mut gallery = gallery_with(&[], CardLayout::default());
        assert!(gallery.is_empty());
        assert_eq!(gallery.render(), "No contacts registered yet.\n");
    }

    #[test]
    fn test_cards_follow_store_order() {
        let gallery = gallery_with(
            &[("Ana", "ana@example.com"), ("Bob", "bob@example.com")],
            CardLayout::default(),
        );
        let cards = gallery.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Ana");
        assert_eq!(cards[1].email, "bob@example.com");
    }

    #[test]
    fn test_render_card_box() {
        let layout = CardLayout {
            card_width: 14,
            cards_per_row: 1,
        };
        let mut gallery = gallery_with(&[("Ana", "ana@example.com")], layout);

        // inner width is 10: the e-mail continues on a second line
        let border = format!("+{}+", "-".repeat(12));
        let expected = format!(
            "{border}\n| Ana{pad} |\n| ana@exampl |\n| e.com      |\n{border}\n\n",
            border = border,
            pad = " ".repeat(7)
        );
        assert_eq!(gallery.render(), expected);
    }

    #[test]
    fn test_long_email_shown_in_full() {
        let email = "firstname.lastname@company.com";
        let mut gallery = gallery_with(&[("Ana", email)], CardLayout::default());

        let content: String = gallery
            .render()
            .lines()
            .filter_map(|l| l.strip_prefix("| ")?.strip_suffix(" |"))
            .map(str::trim_end)
            .collect();
        assert_eq!(content, format!("Ana{}", email));
    }

    #[test]
    fn test_cards_in_a_row_share_height() {
        let layout = CardLayout {
            card_width: 14,
            cards_per_row: 2,
        };
        let mut gallery = gallery_with(
            &[("Ana", "a@b.co"), ("Bob", "bob@example.com")],
            layout,
        );

        let rendered = gallery.render();
        let lines: Vec<&str> = rendered.lines().take_while(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.chars().count() == 14 * 2 + 2));
        assert!(lines[3].starts_with(&format!("| {} |", " ".repeat(10))));
    }

    #[test]
    fn test_rows_wrap() {
        let layout = CardLayout {
            card_width: 20,
            cards_per_row: 2,
        };
        let mut gallery = gallery_with(
            &[
                ("Ana", "ana@example.com"),
                ("Bob", "bob@example.com"),
                ("Cid", "cid@example.com"),
            ],
            layout,
        );
        let rendered = gallery.render();
        let first_line = rendered.lines().next().unwrap();
        assert_eq!(first_line.matches('+').count(), 4);
        assert_eq!(rendered.matches("| Cid").count(), 1);
        assert_eq!(rendered.lines().filter(|l| l.starts_with('+')).count(), 4);
    }

    #[test]
    fn test_render_follows_store_updates() {
        let store = Arc::new(SessionStore::new());
        let mut gallery = ContactGallery::new(store.clone(), CardLayout::default());
        assert!(gallery.render().contains(EMPTY_GALLERY_MESSAGE));

        store.append(Contact::from_fields("Ana", "ana@example.com").unwrap());
        let rendered = gallery.render();
        assert!(rendered.contains("Ana"));
        assert!(!rendered.contains(EMPTY_GALLERY_MESSAGE));
    }
}
