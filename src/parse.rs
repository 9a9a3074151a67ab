//! Parsers for DMS coordinates entered as text.

use crate::Error;
use nom::{
    error::{context, VerboseError, VerboseErrorKind},
    Offset,
};
use std::str::FromStr;

pub type Input<'a> = &'a [u8];
pub type Result<'a, O> = nom::IResult<Input<'a>, O, VerboseError<Input<'a>>>;

/// Implements a `parse` function for an input enum, that allows it to be
/// parsed in terms of a numeric type.
///
/// Shamelessly borrowed from fasterthanlime's executable packer tutorial:
/// https://fasterthanli.me/series/making-our-own-executable-packer
#[macro_export]
macro_rules! impl_parse_for_enum {
    ($type: ident, $number_parser: ident) => {
        impl $type {
            pub fn parse(i: crate::parse::Input) -> crate::parse::Result<Self> {
                use nom::{
                    combinator::map_res,
                    error::{context, ErrorKind},
                    number::complete::$number_parser,
                };
                use std::convert::TryFrom;

                let parser = map_res($number_parser, |x| {
                    Self::try_from(x).map_err(|_| ErrorKind::Alt)
                });
                context(stringify!($type), parser)(i)
            }
        }
    };
}

/// Wrap a parser so that it skips spaces and tabs on either side of its input.
pub fn padded<'a, O, F>(parser: F) -> impl FnMut(Input<'a>) -> Result<'a, O>
where
    F: FnMut(Input<'a>) -> Result<'a, O>,
{
    use nom::{character::complete::space0, sequence::delimited};
    delimited(space0, parser, space0)
}

/// Parse a run of decimal digits into an unsigned integer. Fails if the value doesn't fit in `T`.
pub fn unsigned<T: FromStr>(i: Input) -> Result<T> {
    use nom::{character::complete::digit1, combinator::map_res};

    map_res(digit1, |digits: Input| {
        std::str::from_utf8(digits)
            .map_err(|_| ())
            .and_then(|s| s.parse::<T>().map_err(|_| ()))
    })(i)
}

/// Parse the `degrees minutes seconds` part of a component. Each number may be followed by its
/// unit mark (`°` or `d`, `'` or `′`, `"` or `″`).
pub fn magnitude(i: Input) -> Result<(u16, u8, u8)> {
    use nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::space0,
        combinator::opt,
        sequence::{preceded, terminated},
    };

    let (i, degrees) = context(
        "Degrees",
        preceded(space0, terminated(unsigned::<u16>, opt(alt((tag("°"), tag("d")))))),
    )(i)?;
    let (i, minutes) = context(
        "Minutes",
        preceded(space0, terminated(unsigned::<u8>, opt(alt((tag("'"), tag("′")))))),
    )(i)?;
    let (i, seconds) = context(
        "Seconds",
        preceded(space0, terminated(unsigned::<u8>, opt(alt((tag("\""), tag("″")))))),
    )(i)?;

    Ok((i, (degrees, minutes, seconds)))
}

/// Run `parser` over the whole of `i`, turning any failure (including leftover input) into an
/// `Error::Parse`.
pub fn complete<'a, O, F>(i: Input<'a>, parser: F) -> std::result::Result<O, Error>
where
    F: FnMut(Input<'a>) -> Result<'a, O>,
{
    use nom::combinator::all_consuming;

    match all_consuming(parser)(i) {
        Ok((_, result)) => Ok(result),
        Err(e) => Err(Error::Parse(pretty_error_message(i, e))),
    }
}

/// Describe a parser error as the chain of contexts that failed, outermost first, along with the
/// byte offset into `input` at which each of them gave up.
pub fn pretty_error_message(input: Input, err: nom::Err<VerboseError<Input>>) -> String {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e
            .errors
            .iter()
            .rev()
            .map(|(rest, kind)| {
                let offset = input.offset(rest);
                match kind {
                    VerboseErrorKind::Context(c) => format!("{} (byte {})", c, offset),
                    VerboseErrorKind::Char(c) => format!("expected '{}' (byte {})", c, offset),
                    VerboseErrorKind::Nom(e) => format!("{:?} (byte {})", e, offset),
                }
            })
            .collect::<Vec<_>>()
            .join(" => "),
        nom::Err::Incomplete(_) => "unexpected end of input".to_string(),
    }
}
