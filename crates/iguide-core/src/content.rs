//! Static guide content
//!
//! Every string shown by the guide lives here. The records are plain `const`
//! data: defined once, never mutated. Layout decisions (ordering, numbering,
//! which terminal window a command lands in) belong to [`crate::document`].

use serde::Serialize;

use crate::types::TargetOs;

// ─────────────────────────────────────────────────────────────────────────────
// Record types
// ─────────────────────────────────────────────────────────────────────────────

/// Command text, either shared by every OS or specific to each family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommandText {
    Fixed(&'static str),
    PerOs {
        unix: &'static str,
        windows: &'static str,
    },
}

impl CommandText {
    /// Pick the literal to display for the given OS
    pub fn resolve(&self, os: TargetOs) -> &'static str {
        match (self, os) {
            (CommandText::Fixed(text), _) => text,
            (CommandText::PerOs { unix, .. }, TargetOs::Unix) => unix,
            (CommandText::PerOs { windows, .. }, TargetOs::Windows) => windows,
        }
    }

    /// Whether the displayed text changes with the OS selection
    pub fn is_os_specific(&self) -> bool {
        matches!(self, CommandText::PerOs { .. })
    }
}

/// A command with a copy button. `key` identifies its confirmation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CopyCommand {
    pub text: CommandText,
    pub key: &'static str,
}

impl CopyCommand {
    pub const fn fixed(text: &'static str, key: &'static str) -> Self {
        Self {
            text: CommandText::Fixed(text),
            key,
        }
    }
}

/// Shell prompt drawn in front of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Prompt {
    /// Plain `$`
    #[default]
    Shell,
    /// `(venv) $` inside an activated virtual environment
    Venv,
}

impl Prompt {
    pub fn as_str(self) -> &'static str {
        match self {
            Prompt::Shell => "$",
            Prompt::Venv => "(venv) $",
        }
    }
}

/// Installation step or usage example
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
    /// Prerequisite items, in display order (may be empty)
    pub items: &'static [&'static str],
    pub command: Option<CopyCommand>,
}

/// Virtual-environment sub-step: a heading over one terminal line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VenvStep {
    pub title: &'static str,
    pub prompt: Prompt,
    pub command: CopyCommand,
}

/// Advanced configuration feature with a multi-line code example
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub title: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

/// Troubleshooting tip. Its command is display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub title: &'static str,
    pub description: &'static str,
    pub command: &'static str,
}

// ─────────────────────────────────────────────────────────────────────────────
// Page header
// ─────────────────────────────────────────────────────────────────────────────

pub const PAGE_TITLE: &str = "Implementation Guide";
pub const PAGE_SUBTITLE: &str = "Complete guide to installing, configuring, and using Insight CLI";

// ─────────────────────────────────────────────────────────────────────────────
// Quick start
// ─────────────────────────────────────────────────────────────────────────────

pub const QUICK_START_COMMANDS: &[CopyCommand] = &[
    CopyCommand::fixed("pip install insight-cli-sarang", "quickstart-install"),
    CopyCommand::fixed("insight-cli-sarang .", "quickstart-run"),
];

pub const QUICK_START_RESULT: &str = "✓ Analysis complete! Report saved to insight_report.md";

// ─────────────────────────────────────────────────────────────────────────────
// Installation
// ─────────────────────────────────────────────────────────────────────────────

pub const INSTALLATION_STEPS: &[Step] = &[
    Step {
        title: "Prerequisites",
        description: "Before you begin, ensure you have the following installed:",
        items: &[
            "Python 3.8 or higher",
            "pip (Python package manager)",
            "Git (for cloning repositories)",
        ],
        command: None,
    },
    Step {
        title: "Installation",
        description: "Install Insight CLI using pip:",
        items: &[],
        command: Some(CopyCommand::fixed("pip install insight-cli-sarang", "install")),
    },
    Step {
        title: "Verify Installation",
        description: "Check if Insight CLI is installed correctly:",
        items: &[],
        command: Some(CopyCommand::fixed("insight-cli-sarang --version", "version")),
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Virtual environment
// ─────────────────────────────────────────────────────────────────────────────

pub const VENV_CALLOUT_TITLE: &str = "Best Practice";
pub const VENV_CALLOUT_BODY: &str =
    "Using a virtual environment keeps your system Python clean and prevents dependency conflicts.";

/// Identifier of the OS-dependent activation command
pub const VENV_ACTIVATE_KEY: &str = "venv-activate";

pub const VENV_STEPS: &[VenvStep] = &[
    VenvStep {
        title: "Create Virtual Environment",
        prompt: Prompt::Shell,
        command: CopyCommand::fixed("python3 -m venv venv", "venv-create"),
    },
    VenvStep {
        title: "Activate Virtual Environment",
        prompt: Prompt::Shell,
        command: CopyCommand {
            text: CommandText::PerOs {
                unix: "source venv/bin/activate",
                windows: "venv\\Scripts\\activate",
            },
            key: VENV_ACTIVATE_KEY,
        },
    },
    VenvStep {
        title: "Install Insight CLI",
        prompt: Prompt::Venv,
        command: CopyCommand::fixed("pip install insight-cli-sarang", "venv-install"),
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// API key
// ─────────────────────────────────────────────────────────────────────────────

pub const API_KEY_INTRO: &str =
    "To use AI-powered features, you need to configure your Google API key:";

pub const API_KEY_COMMAND: CopyCommand =
    CopyCommand::fixed("export GOOGLE_API_KEY=\"your-api-key-here\"", "api-key");

/// Shown below the export line only while Windows is selected
pub const API_KEY_WINDOWS_LABEL: &str = "Windows:";
pub const API_KEY_WINDOWS_COMMAND: &str = "set GOOGLE_API_KEY=your-api-key-here";

pub const API_KEY_TIP_TITLE: &str = "Tip";
pub const API_KEY_TIP_BODY: &str = "Add this to your shell profile (~/.bashrc, ~/.zshrc, or ~/.bash_profile) to make it persistent across sessions.";

// ─────────────────────────────────────────────────────────────────────────────
// Usage examples
// ─────────────────────────────────────────────────────────────────────────────

pub const USAGE_EXAMPLES: &[Step] = &[
    Step {
        title: "Basic Analysis",
        description: "Analyze the current directory",
        items: &[],
        command: Some(CopyCommand::fixed("insight-cli-sarang .", "basic")),
    },
    Step {
        title: "Analyze Specific Directory",
        description: "Analyze a specific project folder",
        items: &[],
        command: Some(CopyCommand::fixed(
            "insight-cli-sarang /path/to/your/project",
            "specific",
        )),
    },
    Step {
        title: "Custom Output File",
        description: "Specify a custom output filename",
        items: &[],
        command: Some(CopyCommand::fixed(
            "insight-cli-sarang . --output my-report.md",
            "output",
        )),
    },
    Step {
        title: "Exclude Files",
        description: "Exclude specific files or patterns",
        items: &[],
        command: Some(CopyCommand::fixed(
            r#"insight-cli-sarang . --exclude "*.test.js" "node_modules/*""#,
            "exclude",
        )),
    },
    Step {
        title: "Verbose Mode",
        description: "Enable detailed logging",
        items: &[],
        command: Some(CopyCommand::fixed("insight-cli-sarang . --verbose", "verbose")),
    },
    Step {
        title: "Help Command",
        description: "View all available options",
        items: &[],
        command: Some(CopyCommand::fixed("insight-cli-sarang --help", "help")),
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Advanced configuration
// ─────────────────────────────────────────────────────────────────────────────

pub const ADVANCED_FEATURES: &[Snippet] = &[
    Snippet {
        title: ".insightignore File",
        description: "Create a .insightignore file in your project root to exclude files and directories from analysis. Uses the same syntax as .gitignore.",
        example: "# .insightignore example
node_modules/
*.test.js
dist/
build/
.env
*.log",
    },
    Snippet {
        title: "Environment Variables",
        description: "Configure Insight CLI using environment variables for API keys and settings.",
        example: "# Set Google API Key
export GOOGLE_API_KEY=\"your-api-key-here\"

# For Windows
set GOOGLE_API_KEY=your-api-key-here",
    },
    Snippet {
        title: "CI/CD Integration",
        description: "Integrate Insight CLI into your continuous integration pipeline.",
        example: "# GitHub Actions example
- name: Run Insight Analysis
  run: |
    pip install insight-cli-sarang
    insight-cli-sarang . --output analysis.md

- name: Upload Report
  uses: actions/upload-artifact@v2
  with:
    name: insight-report
    path: analysis.md",
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Troubleshooting
// ─────────────────────────────────────────────────────────────────────────────

pub const TROUBLESHOOTING_TIPS: &[Tip] = &[
    Tip {
        title: "Command not found",
        description: "If you get a \"command not found\" error, ensure pip's bin directory is in your PATH:",
        command: "export PATH=\"$HOME/.local/bin:$PATH\"",
    },
    Tip {
        title: "Permission denied",
        description: "If you encounter permission errors, try installing with the --user flag:",
        command: "pip install --user insight-cli-sarang",
    },
    Tip {
        title: "API key issues",
        description: "If AI features aren't working, verify your API key is set correctly by running:",
        command: "echo $GOOGLE_API_KEY",
    },
];
