//   ____             _____
//  |  _ \ __      __|  ___|  ___   _ __   __ _   ___
//  | |_) |\ \ /\ / /| |_    / _ \ | '__| / _` | / _ \
//  |  __/  \ V  V / |  _|  | (_) || |   | (_| ||  __/
//  |_|      \_/\_/  |_|     \___/ |_|    \__, | \___|
//                                        |___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator

use std::fmt;
use log::debug;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use crate::error::GenerateError;
use crate::strength::{classify, Strength, StrengthEstimator, StrengthLabel, ZxcvbnEstimator};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

// 复杂度等级
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplexityTier {
    Low,
    Medium,
    High,
    /// Any other name. Contributes no base alphabet.
    Unrecognized(String),
}

impl ComplexityTier {
    pub fn parse(name: &str) -> Self {
        match name {
            "low" => ComplexityTier::Low,
            "medium" => ComplexityTier::Medium,
            "high" => ComplexityTier::High,
            other => ComplexityTier::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ComplexityTier::Low => "low",
            ComplexityTier::Medium => "medium",
            ComplexityTier::High => "high",
            ComplexityTier::Unrecognized(name) => name,
        }
    }
}

impl From<&str> for ComplexityTier {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 密码生成选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub complexity: ComplexityTier,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_special: bool,
    /// Characters appended to the pool verbatim.
    pub contains: String,
    /// Characters removed from the pool, exact match.
    pub excludes: String,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            complexity: ComplexityTier::Medium,
            include_upper: true,
            include_lower: true,
            include_digits: true,
            include_special: true,
            contains: String::new(),
            excludes: String::new(),
        }
    }
}

/// Characters eligible for the random draw, in assembly order.
///
/// Duplicates are kept: a character listed twice is drawn twice as often.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    pub fn assemble(options: &GenerationOptions) -> Self {
        let mut pool = String::new();

        // low 等级忽略大写和特殊字符选项
        let (upper, lower, digits, special) = match options.complexity {
            ComplexityTier::Low => (false, true, true, false),
            ComplexityTier::Medium => (true, true, true, false),
            ComplexityTier::High => (true, true, true, true),
            ComplexityTier::Unrecognized(_) => (false, false, false, false),
        };
        if upper && options.include_upper { pool.push_str(UPPERCASE); }
        if lower && options.include_lower { pool.push_str(LOWERCASE); }
        if digits && options.include_digits { pool.push_str(DIGITS); }
        if special && options.include_special { pool.push_str(SPECIAL); }

        pool.push_str(&options.contains);
        pool.retain(|c| !options.excludes.contains(c));

        Self { chars: pool.chars().collect() }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Draws `length` characters uniformly, with replacement.
    pub fn draw<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> String {
        (0..length)
            .filter_map(|_| self.chars.choose(rng).copied())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPassword {
    text: String,
    strength: Strength,
}

impl GeneratedPassword {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn label(&self) -> StrengthLabel {
        self.strength.label
    }

    pub fn into_parts(self) -> (String, StrengthLabel) {
        (self.text, self.strength.label)
    }
}

/// Random password generator rated by a pluggable strength estimator.
#[derive(Debug, Clone, Default)]
pub struct PasswordGenerator<E = ZxcvbnEstimator> {
    estimator: E,
}

impl PasswordGenerator<ZxcvbnEstimator> {
    pub fn new() -> Self {
        Self { estimator: ZxcvbnEstimator }
    }
}

impl<E: StrengthEstimator> PasswordGenerator<E> {
    pub fn with_estimator(estimator: E) -> Self {
        Self { estimator }
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    pub fn generate(&self, options: &GenerationOptions) -> Result<GeneratedPassword, GenerateError> {
        self.generate_with_rng(options, &mut OsRng)
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        options: &GenerationOptions,
        rng: &mut R,
    ) -> Result<GeneratedPassword, GenerateError> {
        if options.length == 0 {
            return Err(GenerateError::InvalidConfiguration(
                "password length must be at least 1".to_string(),
            ));
        }

        let pool = CharacterPool::assemble(options);
        if pool.is_empty() {
            return Err(GenerateError::InvalidConfiguration(
                "at least one character type must be selected".to_string(),
            ));
        }
        debug!(
            "character pool: {} chars (tier {}), drawing {}",
            pool.len(),
            options.complexity,
            options.length
        );

        let text = pool.draw(options.length, rng);
        let strength = classify(&self.estimator, &text)?;
        debug!("generated password rated {} ({}/4)", strength.label, strength.score);

        Ok(GeneratedPassword { text, strength })
    }
}

/// Generates one password with the OS RNG and zxcvbn rating.
pub fn generate_password(options: &GenerationOptions) -> Result<(String, StrengthLabel), GenerateError> {
    PasswordGenerator::new().generate(options).map(GeneratedPassword::into_parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_is_ascii_punctuation() {
        assert_eq!(SPECIAL.len(), 32);
        assert!(SPECIAL.chars().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!(ComplexityTier::parse("low"), ComplexityTier::Low);
        assert_eq!(ComplexityTier::parse("high"), ComplexityTier::High);
        assert_eq!(
            ComplexityTier::parse("HIGH"),
            ComplexityTier::Unrecognized("HIGH".to_string())
        );
        assert_eq!(ComplexityTier::parse("extreme").to_string(), "extreme");
    }

    #[test]
    fn test_pool_order_is_deterministic() {
        let options = GenerationOptions {
            complexity: ComplexityTier::Low,
            contains: "!a".to_string(),
            excludes: "0".to_string(),
            ..Default::default()
        };
        let pool = CharacterPool::assemble(&options);
        let expected: Vec<char> = format!("{}123456789!a", LOWERCASE).chars().collect();
        assert_eq!(pool.chars(), expected.as_slice());
        assert_eq!(pool, CharacterPool::assemble(&options));
    }
}
