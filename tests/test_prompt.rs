use pwforge::error::PromptError;
use pwforge::passgen::{ComplexityTier, GenerationOptions};
use pwforge::prompt::prompt_options;
use std::io::Cursor;

fn run(script: &str) -> (Result<GenerationOptions, PromptError>, String) {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    let result = prompt_options(&mut input, &mut output, &GenerationOptions::default());
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn test_scripted_answers() {
    let (result, transcript) = run("8\n Low \nn\ny\ny\nn\n!\nl1\n");
    let options = result.unwrap();
    assert_eq!(
        options,
        GenerationOptions {
            length: 8,
            complexity: ComplexityTier::Low,
            include_upper: false,
            include_lower: true,
            include_digits: true,
            include_special: false,
            contains: "!".to_string(),
            excludes: "l1".to_string(),
        }
    );
    assert!(transcript.contains("Password length [12]: "));
    assert!(transcript.contains("Complexity (low, medium, high) [medium]: "));
}

#[test]
fn test_empty_answers_keep_defaults() {
    let (result, _) = run("\n\n\n\n\n\n\n\n");
    assert_eq!(result.unwrap(), GenerationOptions::default());
}

#[test]
fn test_exhausted_input_keeps_defaults() {
    let (result, _) = run("");
    assert_eq!(result.unwrap(), GenerationOptions::default());
}

#[test]
fn test_invalid_length() {
    let (result, _) = run("twelve\n");
    assert!(matches!(result, Err(PromptError::InvalidLength(s)) if s == "twelve"));
}
