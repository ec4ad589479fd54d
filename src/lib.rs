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
// Library entry

pub mod configtool;
pub mod error;
pub mod passgen;
pub mod prompt;
pub mod setclip;
pub mod strength;

pub use error::{GenerateError, StrengthEvaluationError};
pub use passgen::{
    generate_password, CharacterPool, ComplexityTier, GeneratedPassword, GenerationOptions,
    PasswordGenerator,
};
pub use strength::{classify, Strength, StrengthEstimator, StrengthLabel, ZxcvbnEstimator};
