use winnow::ascii::dec_uint;
use winnow::combinator::{cut_err, delimited, preceded, repeat};
use winnow::error::{ErrMode, ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::types::{CheckboxId, FieldName};

// -- Identifiers --------------------------------------------------------------

fn ident<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1.., |c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
    )
        .take()
        .parse_next(input)
}

fn dotted_tail(input: &mut &str) -> ModalResult<()> {
    let _: () = repeat(0.., preceded('.', ident).void()).parse_next(input)?;
    Ok(())
}

/// Attribute path after the index segment, e.g. `baseFee` or `company.name`.
fn attribute<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (ident, dotted_tail).take().parse_next(input)
}

// -- Positional encodings -----------------------------------------------------

/// `<list>[<index>].<attribute>`, the name shape of every input in a rule row.
pub(super) fn field_name(input: &mut &str) -> ModalResult<FieldName> {
    let list = ident
        .context(StrContext::Expected(StrContextValue::Description(
            "list name",
        )))
        .parse_next(input)?;
    let index = delimited('[', cut_err(dec_uint::<_, usize, _>), cut_err(']'))
        .context(StrContext::Expected(StrContextValue::Description(
            "list index",
        )))
        .parse_next(input)?;
    let attr = preceded('.', cut_err(attribute))
        .context(StrContext::Expected(StrContextValue::Description(
            "attribute",
        )))
        .parse_next(input)?;
    Ok(FieldName::new(list, index, attr))
}

/// `<prefix><index>`, the element-id shape of a row checkbox. The index is
/// the trailing run of decimal digits; the prefix is everything before it
/// and must not itself start with a digit.
pub(super) fn checkbox_id(input: &mut &str) -> ModalResult<CheckboxId> {
    let token = take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || c == '_' || c == '-'
    })
    .context(StrContext::Expected(StrContextValue::Description(
        "checkbox id",
    )))
    .parse_next(input)?;

    let prefix_len = token.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if prefix_len == 0 || prefix_len == token.len() {
        return Err(ErrMode::from_input(input).cut());
    }
    if token.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ErrMode::from_input(input).cut());
    }
    let index: usize = token[prefix_len..]
        .parse()
        .map_err(|_| ErrMode::from_input(input).cut())?;
    Ok(CheckboxId::new(&token[..prefix_len], index))
}
