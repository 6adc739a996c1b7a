/// A fixed, ordered list of options shown to the user as a numbered menu.
///
/// Indices are 1-based everywhere the user can see them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Catalog {
    options: &'static [&'static str],
}

pub const ISSUE_CATEGORIES: Catalog = Catalog::new(&[
    "Not cooling",
    "Freezer not freezing",
    "Leaking water",
    "Making strange noises",
    "Ice maker or water dispenser fault",
    "Door or seal damaged",
    "Other",
]);

pub const TIME_SLOTS: Catalog = Catalog::new(&[
    "Morning (9 AM - 12 PM)",
    "Afternoon (12 PM - 4 PM)",
    "Evening (4 PM - 7 PM)",
    "ASAP",
]);

impl Catalog {
    pub const fn new(options: &'static [&'static str]) -> Self {
        Self { options }
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn option_at(&self, index: usize) -> Option<&'static str> {
        index.checked_sub(1).and_then(|offset| self.options.get(offset)).copied()
    }

    /// Resolves a raw reply such as `" 3 "` into the option it selects.
    pub fn resolve(&self, raw: &str) -> Option<&'static str> {
        raw.trim().parse::<usize>().ok().and_then(|index| self.option_at(index))
    }

    pub fn render_menu(&self) -> String {
        let mut menu = String::new();
        for (offset, option) in self.options.iter().enumerate() {
            menu.push_str(&format!("{}. {option}\n", offset + 1));
        }
        menu.push_str(&format!("\nReply with the number (1-{})", self.option_count()));
        menu
    }

    pub fn invalid_option_message(&self) -> String {
        format!("Invalid option. Please reply with a number between 1-{}.", self.option_count())
    }
}
