//! Inline `style` attribute parsing.
//!
//! Declarations are tokenized with cssparser for correct handling of
//! strings, functions, and nested blocks, but values are kept as raw source
//! text: the pipeline diffs and maps literal value strings, it does not
//! interpret them.

use cssparser::{Parser, ParserInput, Token};

use crate::style::StyleMap;

/// Parse `property: value; ...` into a style map. Malformed declarations
/// are skipped, the rest of the block is recovered.
pub(crate) fn parse_style_attribute(text: &str) -> StyleMap {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    let mut style = StyleMap::new();

    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }

        let result: Result<(), cssparser::ParseError<'_, ()>> = parser.try_parse(|i| {
            let property = match i.next()? {
                Token::Ident(name) => name.to_string().to_lowercase(),
                _ => return Err(i.new_custom_error(())),
            };

            i.skip_whitespace();
            match i.next()? {
                Token::Colon => {}
                _ => return Err(i.new_custom_error(())),
            }

            i.skip_whitespace();

            // Capture the raw value text between the colon and the
            // terminating semicolon (or end of input). Function and bracket
            // tokens open nested blocks that must be consumed before the
            // position moves past the closing delimiter.
            let start = i.position();
            let mut end = start;
            loop {
                match i.next() {
                    Ok(Token::Semicolon) => break,
                    Ok(token) => {
                        let nested = matches!(
                            token,
                            Token::Function(_)
                                | Token::ParenthesisBlock
                                | Token::SquareBracketBlock
                                | Token::CurlyBracketBlock
                        );
                        if nested {
                            let _ = i.parse_nested_block(
                                |i| -> Result<(), cssparser::ParseError<'_, ()>> {
                                    while i.next().is_ok() {}
                                    Ok(())
                                },
                            );
                        }
                        end = i.position();
                    }
                    Err(_) => break,
                }
            }

            let value = i.slice(start..end).trim().to_string();
            if !value.is_empty() {
                style.insert(property, value);
            }
            Ok(())
        });

        if result.is_err() {
            // Skip to the next semicolon to recover.
            loop {
                match parser.next() {
                    Ok(Token::Semicolon) => break,
                    Ok(_) => continue,
                    Err(_) => break,
                }
            }
        }
    }

    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_declarations() {
        let style = parse_style_attribute("display: flex; gap: 8px");
        assert_eq!(style.get("display"), Some("flex"));
        assert_eq!(style.get("gap"), Some("8px"));
    }

    #[test]
    fn keeps_function_values_verbatim() {
        let style = parse_style_attribute("color: rgb(255, 0, 0); width: calc(100% - 8px)");
        assert_eq!(style.get("color"), Some("rgb(255, 0, 0)"));
        assert_eq!(style.get("width"), Some("calc(100% - 8px)"));
    }

    #[test]
    fn lowercases_property_names() {
        let style = parse_style_attribute("DISPLAY: block");
        assert_eq!(style.get("display"), Some("block"));
    }

    #[test]
    fn recovers_after_malformed_declaration() {
        let style = parse_style_attribute("4broken; display: grid;");
        assert_eq!(style.get("display"), Some("grid"));
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn multi_word_values_survive() {
        let style = parse_style_attribute("padding: 8px 16px; font-family: Arial, sans-serif");
        assert_eq!(style.get("padding"), Some("8px 16px"));
        assert_eq!(style.get("font-family"), Some("Arial, sans-serif"));
    }
}
