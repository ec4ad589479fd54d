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
// Interactive option prompts

use std::io::{BufRead, Write};

use crate::configtool::normalize_tier;
use crate::error::PromptError;
use crate::passgen::{ComplexityTier, GenerationOptions};

/// 提示用户输入，返回去除首尾空白的回答
pub fn prompt_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, PromptError> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: bool,
) -> Result<bool, PromptError> {
    let hint = if default { "Y/n" } else { "y/N" };
    let answer = prompt_input(input, output, &format!("{} ({}): ", prompt, hint))?;
    Ok(match answer.to_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    })
}

/// Asks for every generation option in turn. An empty answer keeps the default.
pub fn prompt_options<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    defaults: &GenerationOptions,
) -> Result<GenerationOptions, PromptError> {
    let answer = prompt_input(input, output, &format!("Password length [{}]: ", defaults.length))?;
    let length = if answer.is_empty() {
        defaults.length
    } else {
        answer.parse::<usize>().map_err(|_| PromptError::InvalidLength(answer.clone()))?
    };

    let answer = prompt_input(
        input,
        output,
        &format!("Complexity (low, medium, high) [{}]: ", defaults.complexity),
    )?;
    let complexity = if answer.is_empty() {
        defaults.complexity.clone()
    } else {
        ComplexityTier::parse(&normalize_tier(&answer))
    };

    let include_upper = prompt_yes_no(input, output, "Include uppercase letters?", defaults.include_upper)?;
    let include_lower = prompt_yes_no(input, output, "Include lowercase letters?", defaults.include_lower)?;
    let include_digits = prompt_yes_no(input, output, "Include digits?", defaults.include_digits)?;
    let include_special = prompt_yes_no(input, output, "Include special characters?", defaults.include_special)?;

    let contains = prompt_input(input, output, "Characters to include (e.g. !@#): ")?;
    let excludes = prompt_input(input, output, "Characters to exclude: ")?;

    Ok(GenerationOptions {
        length,
        complexity,
        include_upper,
        include_lower,
        include_digits,
        include_special,
        contains: if contains.is_empty() { defaults.contains.clone() } else { contains },
        excludes: if excludes.is_empty() { defaults.excludes.clone() } else { excludes },
    })
}
