#![no_main]
use dpe_estimator::model::DwellingProfile;
use dpe_estimator::pipeline::{parse_answers, AnswerFormat, Assessment};
use libfuzzer_sys::fuzz_target;

/// Fuzz answer parsing and resolution.
///
/// Any document that parses must either resolve and score, or fail with an
/// error; scoring itself must never panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let format = AnswerFormat::detect(None, s);
        if let Ok(answers) = parse_answers(s, format) {
            let _ = Assessment::evaluate("fuzz", &answers, &DwellingProfile::default());
        }
    }
});
