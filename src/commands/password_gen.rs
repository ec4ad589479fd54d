use std::io;
use anyhow::{Context, Result};
use log::warn;

use pwforge::configtool::{normalize_tier, ConfigFile};
use pwforge::passgen::{ComplexityTier, GenerationOptions, PasswordGenerator};
use pwforge::prompt::prompt_options;
use pwforge::setclip::copy_to_clipboard;

/// Command-line values that win over the configured defaults.
#[derive(Debug, Default)]
pub struct GenOverrides {
    pub length: Option<usize>,
    pub complexity: Option<String>,
    pub no_uppercase: bool,
    pub no_lowercase: bool,
    pub no_numbers: bool,
    pub no_special: bool,
    pub contains: Option<String>,
    pub excludes: Option<String>,
}

impl GenOverrides {
    pub fn apply(self, mut options: GenerationOptions) -> GenerationOptions {
        if let Some(length) = self.length {
            options.length = length;
        }
        if let Some(complexity) = self.complexity {
            options.complexity = ComplexityTier::parse(&normalize_tier(&complexity));
        }
        if self.no_uppercase { options.include_upper = false; }
        if self.no_lowercase { options.include_lower = false; }
        if self.no_numbers { options.include_digits = false; }
        if self.no_special { options.include_special = false; }
        if let Some(contains) = self.contains {
            options.contains = contains;
        }
        if let Some(excludes) = self.excludes {
            options.excludes = excludes;
        }
        options
    }
}

pub fn generate_random(
    config: &ConfigFile,
    overrides: GenOverrides,
    interactive: bool,
    no_copy: bool,
    clear_after: Option<u64>,
) -> Result<()> {
    let defaults = overrides.apply(config.generator.to_options());
    let options = if interactive {
        let stdin = io::stdin();
        prompt_options(&mut stdin.lock(), &mut io::stdout(), &defaults)
            .context("Failed to read generation options")?
    } else {
        defaults
    };

    let generated = PasswordGenerator::new()
        .generate(&options)
        .context("Failed to generate password")?;
    let strength = generated.strength();
    println!("Generated password: {}", generated.text());
    println!("Password strength: {} (score: {}/4)", strength.label, strength.score);

    if config.clipboard.enabled && !no_copy {
        let clear_after = clear_after.or(config.clipboard.clear_after);
        match copy_to_clipboard(generated.text(), clear_after) {
            Ok(()) => match clear_after {
                Some(seconds) => println!("Password copied to clipboard (cleared in {}s).", seconds),
                None => println!("Password copied to clipboard."),
            },
            Err(e) => warn!("Could not copy password to clipboard: {}", e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win_over_defaults() {
        let overrides = GenOverrides {
            length: Some(20),
            complexity: Some(" High ".to_string()),
            no_special: true,
            excludes: Some("O0".to_string()),
            ..Default::default()
        };
        let options = overrides.apply(GenerationOptions::default());
        assert_eq!(options.length, 20);
        assert_eq!(options.complexity, ComplexityTier::High);
        assert!(options.include_upper);
        assert!(!options.include_special);
        assert_eq!(options.excludes, "O0");
        assert_eq!(options.contains, "");
    }

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let defaults = GenerationOptions {
            length: 30,
            contains: "#".to_string(),
            ..Default::default()
        };
        assert_eq!(GenOverrides::default().apply(defaults.clone()), defaults);
    }
}
