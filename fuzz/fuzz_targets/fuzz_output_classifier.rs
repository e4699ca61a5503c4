#![no_main]

use kirby_deploy::domain::services::{classify_stdout, mask_url_credentials};
use kirby_deploy::{OutputClassifier, OutputStream};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let events = classify_stdout(&text);
    assert!(events.len() <= text.lines().count());

    let mut classifier = OutputClassifier::new();
    for line in text.lines() {
        classifier.feed(&mask_url_credentials(line), OutputStream::Stdout);
        classifier.feed(line, OutputStream::Stderr);
    }
    let _ = classifier.finish(Some(0));
});
