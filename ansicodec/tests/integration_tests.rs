//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Output format tests for documents serialized into Discord code blocks

use ansiscribe_ansicodec::{SGRParameter, serialize, strip_ansi_codes, unfence};
use ansiscribe_document::{Background, Document, Foreground, StyleOperation};

/// Every `ESC[...m` parameter found in `body`.
fn parameters(body: &str) -> Vec<u8> {
    let mut codes = Vec::new();
    for sequence in body.split('\x1b').skip(1) {
        let sequence = sequence.strip_prefix('[').expect("CSI");
        let end = sequence.find('m').expect("SGR final byte");
        for code in sequence[..end].split(';') {
            codes.push(code.parse::<u8>().expect("numeric parameter"));
        }
    }
    codes
}

fn styled_sample() -> Document {
    Document::sample()
        .apply_style(0..7, StyleOperation::SetBold)
        .unwrap()
        .apply_style(3..15, StyleOperation::SetUnderline(true))
        .unwrap()
        .apply_style(40..48, StyleOperation::SetBackground(Background::MarbleBlue))
        .unwrap()
}

#[test]
fn test_output_is_fenced() {
    for document in [Document::empty(), Document::new("Hi"), styled_sample()] {
        let output = serialize(&document);
        assert!(output.starts_with("```ansi\n"));
        assert!(output.ends_with("\n```"));
        assert!(unfence(&output).is_some());
    }
}

#[test]
fn test_output_uses_discord_parameters_only() {
    let output = serialize(&styled_sample());
    let body = unfence(&output).unwrap();
    let codes = parameters(body);
    assert!(!codes.is_empty());
    for code in codes {
        assert!(
            matches!(code, 0 | 1 | 4 | 30..=37 | 40..=47),
            "unexpected parameter {code}"
        );
        assert!(SGRParameter::from_u8(code).is_some());
    }
}

#[test]
fn test_output_text_matches_document() {
    let document = styled_sample();
    let output = serialize(&document);
    let body = unfence(&output).unwrap();
    assert_eq!(strip_ansi_codes(body), document.plain_text());
}

#[test]
fn test_one_reset_per_segment() {
    let document = styled_sample();
    let output = serialize(&document);
    assert_eq!(output.matches("\x1b[0m").count(), document.segment_count());
}

#[test]
fn test_output_is_deterministic() {
    let a = styled_sample();
    let b = styled_sample();
    assert_eq!(a, b);
    assert_eq!(serialize(&a), serialize(&b));
    assert_eq!(serialize(&a), serialize(&a));
}

#[test]
fn test_reset_document_has_no_style_parameters() {
    let document = styled_sample().reset();
    let output = serialize(&document);
    let body = unfence(&output).unwrap();
    assert_eq!(parameters(body), vec![0]);
    assert_eq!(body, format!("\x1b[0m{}", document.plain_text()));
}

#[test]
fn test_sample_document_output() {
    let output = serialize(&Document::sample());
    assert_eq!(
        output,
        concat!(
            "```ansi\n",
            "\x1b[0mWelcome to ",
            "\x1b[0m\x1b[33mAnsiscribe",
            "\x1b[0m's ",
            "\x1b[0m\x1b[37;45mDiscord",
            "\x1b[0m ",
            "\x1b[0m\x1b[31mC",
            "\x1b[0m\x1b[32mo",
            "\x1b[0m\x1b[33ml",
            "\x1b[0m\x1b[34mo",
            "\x1b[0m\x1b[35mr",
            "\x1b[0m\x1b[36me",
            "\x1b[0m\x1b[37md",
            "\x1b[0m Text Generator!",
            "\n```",
        )
    );
}

#[test]
fn test_foreground_and_background_are_independent() {
    let document = Document::new("abc")
        .apply_style(0..3, StyleOperation::SetBackground(Background::White))
        .unwrap()
        .apply_style(1..2, StyleOperation::SetForeground(Foreground::Gray))
        .unwrap();
    assert_eq!(
        serialize(&document),
        "```ansi\n\x1b[0m\x1b[47ma\x1b[0m\x1b[30;47mb\x1b[0m\x1b[47mc\n```"
    );
}
