//! Rendering values as TOML literal tokens.
//!
//! Run with: cargo run --example encode_values

use chrono::NaiveDate;
use serde::Serialize;
use std::error::Error;
use toml_literal::{
    encode_primitive, encode_str, structural_token, to_token, Encoder, EncoderOptions, TokenKind,
    Value, WrapStrategy,
};

#[derive(Serialize)]
enum Mode {
    Fast,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Scalars
    let released = NaiveDate::from_ymd_opt(2024, 3, 1)
        .ok_or("invalid date")?
        .and_hms_opt(9, 30, 0)
        .ok_or("invalid time")?;
    for value in [
        Value::from(true),
        Value::from(42),
        Value::from(0.5),
        Value::from(released),
    ] {
        let token = encode_primitive(&value)?;
        println!("{:<8} {:?} -> {}", value.type_name(), token.kind(), token);
    }

    // Keys and strings
    println!("\nkey:    {}", encode_str("server-1", true));
    println!("quoted: {}", encode_str("two words", true));
    println!("escape: {}", encode_str("tab\there \"quoted\"", false));

    // Serde values
    println!("serde:  {}", to_token(&Mode::Fast)?);

    // Assemble a small array-of-tables header by hand
    let header = [
        structural_token(TokenKind::DoubleSquareLeftBracket)?.source(),
        "servers",
        structural_token(TokenKind::DoubleSquareRightBracket)?.source(),
    ]
    .concat();
    println!("\n{}", header);

    // Long text, default layout
    let text = "TOML aims to be a minimal configuration file format that's easy to read due \
                to obvious semantics. It is designed to map unambiguously to a hash table.";
    println!("description = {}", encode_str(text, false));

    // Narrower wrapping
    let narrow = Encoder::new(
        EncoderOptions::new()
            .with_wrap_width(40)
            .with_wrap_strategy(WrapStrategy::Exact),
    );
    println!("\nnarrow = {}", narrow.encode_str(text, false));

    // Fixed-width chunks
    println!("\nchunked = {}", narrow.encode_multiline_chunked(text, 32));

    Ok(())
}
