use anyhow::{Context, Result};
use pwforge::strength::{classify, suggestions, ZxcvbnEstimator};

pub fn test_password(password: &str) -> Result<()> {
    let strength = classify(&ZxcvbnEstimator, password)
        .context("Failed to evaluate password strength")?;
    println!("Password strength: {} (score: {}/4)", strength.label, strength.score);

    let suggestions = suggestions(password);
    if !suggestions.is_empty() {
        println!("Suggestions: {}", suggestions.join(" "));
    }
    Ok(())
}
