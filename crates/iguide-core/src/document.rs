//! Document model for the implementation guide
//!
//! [`Document::build`] lays the static content out as an ordered list of
//! [`Block`]s for one OS selection. The TUI, the plain-text export and the
//! JSON export all render from this structure, so the set of command strings
//! a user can see is decided in exactly one place.

use serde::Serialize;

use crate::content::{
    CopyCommand, Prompt, ADVANCED_FEATURES, API_KEY_COMMAND, API_KEY_INTRO, API_KEY_TIP_BODY,
    API_KEY_TIP_TITLE, API_KEY_WINDOWS_COMMAND, API_KEY_WINDOWS_LABEL, INSTALLATION_STEPS,
    PAGE_SUBTITLE, PAGE_TITLE, QUICK_START_COMMANDS, QUICK_START_RESULT, TROUBLESHOOTING_TIPS,
    USAGE_EXAMPLES, VENV_CALLOUT_BODY, VENV_CALLOUT_TITLE, VENV_STEPS,
};
use crate::types::TargetOs;

/// Icon drawn in front of a section heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionIcon {
    Terminal,
    Download,
    Play,
    Key,
    Book,
    None,
}

/// Visual weight of a callout box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalloutKind {
    /// Yellow alert box
    Advice,
    /// Blue hint box
    Hint,
}

/// Title bar label of a window block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowLabel {
    Terminal,
    Code,
}

impl WindowLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            WindowLabel::Terminal => "Terminal",
            WindowLabel::Code => "Code",
        }
    }
}

/// What a single window line represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineKind {
    /// A shell command after a prompt
    Command { prompt: Prompt },
    /// Program output
    Output,
    /// A labelled side note, e.g. the Windows variant of an export
    Note { label: &'static str },
    /// One line of a code example
    Code,
}

/// One line inside a terminal or code window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowLine {
    pub kind: LineKind,
    pub text: &'static str,
    /// Identifier of the copy-confirmation flag, for copyable lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_key: Option<&'static str>,
}

impl WindowLine {
    pub fn command(prompt: Prompt, text: &'static str) -> Self {
        Self {
            kind: LineKind::Command { prompt },
            text,
            copy_key: None,
        }
    }

    pub fn copyable(prompt: Prompt, command: CopyCommand, os: TargetOs) -> Self {
        Self {
            kind: LineKind::Command { prompt },
            text: command.text.resolve(os),
            copy_key: Some(command.key),
        }
    }

    pub fn output(text: &'static str) -> Self {
        Self {
            kind: LineKind::Output,
            text,
            copy_key: None,
        }
    }

    pub fn note(label: &'static str, text: &'static str) -> Self {
        Self {
            kind: LineKind::Note { label },
            text,
            copy_key: None,
        }
    }

    pub fn code(text: &'static str) -> Self {
        Self {
            kind: LineKind::Code,
            text,
            copy_key: None,
        }
    }
}

/// A terminal-style window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Window {
    pub label: WindowLabel,
    pub lines: Vec<WindowLine>,
}

impl Window {
    pub fn terminal(lines: Vec<WindowLine>) -> Self {
        Self {
            label: WindowLabel::Terminal,
            lines,
        }
    }

    /// Code window with one line per line of `example`
    pub fn code(example: &'static str) -> Self {
        Self {
            label: WindowLabel::Code,
            lines: example.lines().map(WindowLine::code).collect(),
        }
    }
}

/// A rendered content block, in page order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Title {
        text: &'static str,
        subtitle: &'static str,
    },
    Heading {
        icon: SectionIcon,
        text: &'static str,
    },
    /// Numbered step heading
    Step {
        number: usize,
        title: &'static str,
    },
    Subheading {
        text: &'static str,
    },
    Paragraph {
        text: &'static str,
    },
    Bullets {
        items: &'static [&'static str],
    },
    Callout {
        kind: CalloutKind,
        title: &'static str,
        body: &'static str,
    },
    OsSelector {
        selected: TargetOs,
    },
    Window(Window),
}

/// A copyable command as it is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CopyTarget {
    pub key: &'static str,
    pub text: &'static str,
}

/// The whole guide laid out for one OS selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub os: TargetOs,
    pub blocks: Vec<Block>,
}

impl Document {
    /// Lay out the guide for the given OS selection
    pub fn build(os: TargetOs) -> Self {
        let mut blocks = vec![Block::Title {
            text: PAGE_TITLE,
            subtitle: PAGE_SUBTITLE,
        }];

        quick_start(&mut blocks, os);
        installation(&mut blocks, os);
        virtual_environment(&mut blocks, os);
        api_key(&mut blocks, os);
        usage_examples(&mut blocks, os);
        advanced_configuration(&mut blocks);
        troubleshooting(&mut blocks);

        Self { os, blocks }
    }

    /// Every copyable command, in display order
    pub fn copy_targets(&self) -> Vec<CopyTarget> {
        self.windows()
            .flat_map(|w| w.lines.iter())
            .filter_map(|line| {
                line.copy_key.map(|key| CopyTarget {
                    key,
                    text: line.text,
                })
            })
            .collect()
    }

    /// Look up the displayed text of a copy target
    pub fn copy_target(&self, key: &str) -> Option<CopyTarget> {
        self.copy_targets().into_iter().find(|t| t.key == key)
    }

    /// Every command string shown in a terminal window, in display order
    pub fn commands(&self) -> Vec<&'static str> {
        self.windows()
            .flat_map(|w| w.lines.iter())
            .filter(|line| matches!(line.kind, LineKind::Command { .. }))
            .map(|line| line.text)
            .collect()
    }

    fn windows(&self) -> impl Iterator<Item = &Window> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Window(window) => Some(window),
            _ => None,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sections
// ─────────────────────────────────────────────────────────────────────────────

fn quick_start(blocks: &mut Vec<Block>, os: TargetOs) {
    blocks.push(Block::Heading {
        icon: SectionIcon::Terminal,
        text: "Quick Start",
    });

    let mut lines: Vec<WindowLine> = QUICK_START_COMMANDS
        .iter()
        .map(|cmd| WindowLine::copyable(Prompt::Shell, *cmd, os))
        .collect();
    lines.push(WindowLine::output(QUICK_START_RESULT));
    blocks.push(Block::Window(Window::terminal(lines)));
}

fn installation(blocks: &mut Vec<Block>, os: TargetOs) {
    blocks.push(Block::Heading {
        icon: SectionIcon::Download,
        text: "Installation Steps",
    });

    for (index, step) in INSTALLATION_STEPS.iter().enumerate() {
        blocks.push(Block::Step {
            number: index + 1,
            title: step.title,
        });
        blocks.push(Block::Paragraph {
            text: step.description,
        });
        if !step.items.is_empty() {
            blocks.push(Block::Bullets { items: step.items });
        }
        if let Some(command) = step.command {
            blocks.push(Block::Window(Window::terminal(vec![WindowLine::copyable(
                Prompt::Shell,
                command,
                os,
            )])));
        }
    }
}

fn virtual_environment(blocks: &mut Vec<Block>, os: TargetOs) {
    blocks.push(Block::Heading {
        icon: SectionIcon::Play,
        text: "Virtual Environment (Recommended)",
    });
    blocks.push(Block::Callout {
        kind: CalloutKind::Advice,
        title: VENV_CALLOUT_TITLE,
        body: VENV_CALLOUT_BODY,
    });
    blocks.push(Block::OsSelector { selected: os });

    for (index, step) in VENV_STEPS.iter().enumerate() {
        blocks.push(Block::Step {
            number: index + 1,
            title: step.title,
        });
        blocks.push(Block::Window(Window::terminal(vec![WindowLine::copyable(
            step.prompt,
            step.command,
            os,
        )])));
    }
}

fn api_key(blocks: &mut Vec<Block>, os: TargetOs) {
    blocks.push(Block::Heading {
        icon: SectionIcon::Key,
        text: "API Key Configuration",
    });
    blocks.push(Block::Paragraph {
        text: API_KEY_INTRO,
    });

    let mut lines = vec![WindowLine::copyable(Prompt::Shell, API_KEY_COMMAND, os)];
    if os == TargetOs::Windows {
        lines.push(WindowLine::note(
            API_KEY_WINDOWS_LABEL,
            API_KEY_WINDOWS_COMMAND,
        ));
    }
    blocks.push(Block::Window(Window::terminal(lines)));

    blocks.push(Block::Callout {
        kind: CalloutKind::Hint,
        title: API_KEY_TIP_TITLE,
        body: API_KEY_TIP_BODY,
    });
}

fn usage_examples(blocks: &mut Vec<Block>, os: TargetOs) {
    blocks.push(Block::Heading {
        icon: SectionIcon::Book,
        text: "Usage Examples",
    });

    for example in USAGE_EXAMPLES {
        blocks.push(Block::Subheading {
            text: example.title,
        });
        blocks.push(Block::Paragraph {
            text: example.description,
        });
        if let Some(command) = example.command {
            blocks.push(Block::Window(Window::terminal(vec![WindowLine::copyable(
                Prompt::Shell,
                command,
                os,
            )])));
        }
    }
}

fn advanced_configuration(blocks: &mut Vec<Block>) {
    blocks.push(Block::Heading {
        icon: SectionIcon::None,
        text: "Advanced Configuration",
    });

    for feature in ADVANCED_FEATURES {
        blocks.push(Block::Subheading {
            text: feature.title,
        });
        blocks.push(Block::Paragraph {
            text: feature.description,
        });
        blocks.push(Block::Window(Window::code(feature.example)));
    }
}

fn troubleshooting(blocks: &mut Vec<Block>) {
    blocks.push(Block::Heading {
        icon: SectionIcon::None,
        text: "Troubleshooting",
    });

    for tip in TROUBLESHOOTING_TIPS {
        blocks.push(Block::Subheading { text: tip.title });
        blocks.push(Block::Paragraph {
            text: tip.description,
        });
        blocks.push(Block::Window(Window::terminal(vec![WindowLine::command(
            Prompt::Shell,
            tip.command,
        )])));
    }
}
