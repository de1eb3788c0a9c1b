use crate::{
    error::CodingError,
    tokenizer::Token,
    types::{RawField, RawType, SchemaSource},
    utils::{error, quote},
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IDENTIFIER: Regex =
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*$").unwrap();
    static ref EQUALS: Regex = Regex::new(r"^=$").unwrap();
    static ref SEMICOLON: Regex = Regex::new(r"^;$").unwrap();
    static ref LEFT_BRACE: Regex = Regex::new(r"^\{$").unwrap();
    static ref RIGHT_BRACE: Regex = Regex::new(r"^\}$").unwrap();
    static ref ARRAY_TOKEN: Regex = Regex::new(r"^\[\]$").unwrap();
    static ref STRUCT_KEYWORD: Regex = Regex::new(r"^struct$").unwrap();
    static ref PACKAGE_KEYWORD: Regex = Regex::new(r"^package$").unwrap();
    static ref EOF: Regex = Regex::new(r"^$").unwrap();
}

/// Parse a token list into the raw schema source. Field declarations are
/// `Type Name;`, or `Type[] Name = CountField;` for repeated fields,
/// where the `= CountField` clause carries the count reference a repeated
/// field needs.
pub fn parse_schema(tokens: &[Token]) -> Result<SchemaSource, CodingError> {
    let mut types = Vec::new();
    let mut package_text = None;
    let mut index = 0;

    fn current_token<'a>(tokens: &'a [Token], index: usize) -> &'a Token {
        tokens.get(index).expect("Unexpected end of tokens")
    }

    fn eat(tokens: &[Token], index: &mut usize, test: &Regex) -> bool {
        if test.is_match(&current_token(tokens, *index).text) {
            *index += 1;
            true
        } else {
            false
        }
    }

    fn expect(
        tokens: &[Token],
        index: &mut usize,
        test: &Regex,
        expected: &str,
    ) -> Result<(), CodingError> {
        if !eat(tokens, index, test) {
            let tok = current_token(tokens, *index);
            return Err(error(
                &format!("Expected {} but found {}", expected, quote(&tok.text)),
                tok.line,
                tok.column,
            ));
        }
        Ok(())
    }

    // Handle package declaration
    if eat(tokens, &mut index, &PACKAGE_KEYWORD) {
        let pkg_tok = current_token(tokens, index);
        let pkg_text = pkg_tok.text.clone();
        expect(tokens, &mut index, &IDENTIFIER, "identifier")?;
        package_text = Some(pkg_text);
        expect(tokens, &mut index, &SEMICOLON, "\";\"")?;
    }

    // Parse type declarations one by one
    while index < tokens.len() && !eat(tokens, &mut index, &EOF) {
        expect(tokens, &mut index, &STRUCT_KEYWORD, "\"struct\"")?;

        let name_tok = current_token(tokens, index);
        let (type_name, type_line, type_column) =
            (name_tok.text.clone(), name_tok.line, name_tok.column);
        expect(tokens, &mut index, &IDENTIFIER, "identifier")?;
        expect(tokens, &mut index, &LEFT_BRACE, "\"{\"")?;

        // Collect fields
        let mut fields = Vec::new();
        while !eat(tokens, &mut index, &RIGHT_BRACE) {
            let t_tok = current_token(tokens, index);
            let mut type_expr = t_tok.text.clone();
            expect(tokens, &mut index, &IDENTIFIER, "type name")?;
            if eat(tokens, &mut index, &ARRAY_TOKEN) {
                type_expr.push_str("[]");
            }

            let f_tok = current_token(tokens, index);
            let (field_name, field_line, field_column) =
                (f_tok.text.clone(), f_tok.line, f_tok.column);
            expect(tokens, &mut index, &IDENTIFIER, "field name")?;

            // Optional count-field clause
            let mut count_field = None;
            if eat(tokens, &mut index, &EQUALS) {
                let c_tok = current_token(tokens, index);
                let c_text = c_tok.text.clone();
                expect(tokens, &mut index, &IDENTIFIER, "count field name")?;
                count_field = Some(c_text);
            }

            expect(tokens, &mut index, &SEMICOLON, "\";\"")?;

            fields.push(RawField {
                name: field_name,
                type_expr,
                count_field,
                line: field_line,
                column: field_column,
            });
        }

        types.push(RawType {
            name: type_name,
            line: type_line,
            column: type_column,
            fields,
        });
    }

    Ok(SchemaSource {
        package: package_text,
        types,
    })
}
