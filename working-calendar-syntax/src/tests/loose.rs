use crate::error::{Error, Result};
use crate::parser::parse;
use crate::TokenPolicy::Permissive;

use super::tokens;

#[test]
fn suffixes() -> Result<()> {
    assert_eq!(
        parse("3,4+,30*", Permissive)?,
        tokens![3, 4 Moved, 30 Shortened],
    );

    Ok(())
}

#[test]
fn strips_any_punctuation() -> Result<()> {
    assert_eq!(
        parse("3-,4;,5.,(6)", Permissive)?,
        tokens![3, 4, 5, 6],
    );

    Ok(())
}

#[test]
fn star_wins_over_other_markers() -> Result<()> {
    assert_eq!(
        parse("3+*,*4,5*+,6+", Permissive)?,
        tokens![3 Shortened, 4 Shortened, 5 Shortened, 6 Moved],
    );

    Ok(())
}

#[test]
fn surrounding_blanks() -> Result<()> {
    assert_eq!(parse(" 1 , 2+", Permissive)?, tokens![1, 2 Moved]);
    Ok(())
}

#[test]
fn blank_cell() -> Result<()> {
    assert!(parse("", Permissive)?.is_empty());
    assert!(parse(" \t", Permissive)?.is_empty());
    Ok(())
}

#[test]
fn invalid_tokens() {
    for cell in ["3,,4", "3,", "+", "*", "three", "3 4", "3,x"] {
        assert!(
            matches!(parse(cell, Permissive), Err(Error::InvalidDay(_))),
            "permissive parsing should reject `{cell}`",
        );
    }
}

#[test]
fn overflow() {
    assert!(matches!(
        parse("99999999999*", Permissive),
        Err(Error::Overflow { .. }),
    ));
}

#[test]
fn error_message() {
    let err = parse("3,x+", Permissive).unwrap_err();
    assert_eq!(err.to_string(), "`x+` is not a day number");
}
