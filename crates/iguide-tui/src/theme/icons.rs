//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use iguide_app::config::IconMode;
use iguide_core::SectionIcon;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn terminal(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f120}", // nf-fa-terminal
            IconMode::Unicode => "\u{276f}",   // ❯
        }
    }

    pub fn download(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f019}", // nf-fa-download
            IconMode::Unicode => "\u{2193}",   // ↓
        }
    }

    pub fn play(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f04b}", // nf-fa-play
            IconMode::Unicode => "\u{25b6}",   // ▶
        }
    }

    pub fn key(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f084}", // nf-fa-key
            IconMode::Unicode => "*",
        }
    }

    pub fn book(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f02d}", // nf-fa-book
            IconMode::Unicode => "\u{2261}",   // ≡
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "!",
        }
    }

    pub fn info(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f05a}", // nf-fa-info_circle
            IconMode::Unicode => "i",
        }
    }

    pub fn chevron(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }

    // --- Copy affordance ---

    pub fn copy(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c5}", // nf-fa-copy
            IconMode::Unicode => "\u{2398}",   // ⎘
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    // --- Selector / window chrome ---

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    pub fn circle(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f10c}", // nf-fa-circle_o
            IconMode::Unicode => "\u{25cb}",   // ○
        }
    }

    /// Icon drawn in front of a section heading
    pub fn section(&self, icon: SectionIcon) -> Option<&'static str> {
        match icon {
            SectionIcon::Terminal => Some(self.terminal()),
            SectionIcon::Download => Some(self.download()),
            SectionIcon::Play => Some(self.play()),
            SectionIcon::Key => Some(self.key()),
            SectionIcon::Book => Some(self.book()),
            SectionIcon::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_icons_are_not_private_use() {
        let icons = IconSet::new(IconMode::Unicode);
        for icon in [icons.copy(), icons.check(), icons.dot(), icons.terminal()] {
            assert!(icon.chars().all(|c| !('\u{e000}'..='\u{f8ff}').contains(&c)));
        }
    }

    #[test]
    fn test_nerd_font_icons_differ_from_unicode() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.copy(), nerd.copy());
        assert_ne!(unicode.check(), nerd.check());
    }

    #[test]
    fn test_section_none_has_no_icon() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.section(SectionIcon::None), None);
        assert_eq!(icons.section(SectionIcon::Key), Some(icons.key()));
    }
}
