use smallvec::SmallVec;
use smol_str::SmolStr;

/// One `<module> AUTO_TEMPLATE` entry from a template comment.
///
/// `regex` is the quoted instance-name pattern; it is captured for forward
/// compatibility but never applied, so matching stays by module name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TemplateRecord {
    pub pattern: SmolStr,
    pub regex: Option<String>,
    pub overrides: Vec<(SmolStr, String)>,
}

impl TemplateRecord {
    /// Connection override for `port`, if the template declares one.
    pub fn override_for(&self, port: &str) -> Option<&str> {
        self.overrides
            .iter()
            .find(|(name, _)| name == port)
            .map(|(_, expr)| expr.as_str())
    }
}

/// Parse the body of a block comment containing `AUTO_TEMPLATE`.
///
/// Grammar (whitespace and newlines insignificant):
///
/// ```text
/// ( ident "AUTO_TEMPLATE" [ quoted-string ] [ "(" .port(expr) {"," .port(expr)} ")" [";"] ] )+
/// ```
///
/// A connection list applies to every preceding pattern that has not yet
/// received one. A malformed body yields `None`; the caller logs and falls
/// back to default name matching.
pub(crate) fn parse_comment(comment: &str) -> Option<Vec<TemplateRecord>> {
    let body = comment.strip_prefix("/*").unwrap_or(comment);
    let body = body.strip_suffix("*/").unwrap_or(body);

    let mut scanner = Scanner::new(body);
    let mut records: Vec<TemplateRecord> = Vec::new();
    // Entries waiting for their shared connection list.
    let mut pending: SmallVec<[usize; 4]> = SmallVec::new();

    loop {
        let pattern = match scanner.next_token()? {
            Tok::Eof => break,
            Tok::Ident(name) => name,
            _ => return None,
        };
        match scanner.next_token()? {
            Tok::Ident("AUTO_TEMPLATE") => {}
            _ => return None,
        }

        records.push(TemplateRecord {
            pattern: SmolStr::new(pattern),
            regex: None,
            overrides: Vec::new(),
        });
        pending.push(records.len() - 1);

        if let Tok::Str(re) = scanner.peek_token()? {
            records.last_mut()?.regex = Some(re.to_string());
            scanner.next_token()?;
        }

        if scanner.peek_token()? == Tok::LParen {
            scanner.next_token()?;
            let overrides = parse_connection_list(&mut scanner)?;
            for idx in pending.drain(..) {
                records[idx].overrides = overrides.clone();
            }
            if scanner.peek_token()? == Tok::Semicolon {
                scanner.next_token()?;
            }
        }
    }

    if records.is_empty() { None } else { Some(records) }
}

// `.port ( expr ) { , .port ( expr ) } )` -- the opening paren is consumed.
fn parse_connection_list(scanner: &mut Scanner) -> Option<Vec<(SmolStr, String)>> {
    let mut overrides = Vec::new();
    loop {
        match scanner.next_token()? {
            Tok::RParen => break,
            Tok::Dot => {}
            _ => return None,
        }
        let port = match scanner.next_token()? {
            Tok::Ident(name) => SmolStr::new(name),
            _ => return None,
        };
        if scanner.next_token()? != Tok::LParen {
            return None;
        }
        let expr = scanner.balanced_until_close()?;
        overrides.push((port, expr.trim().to_string()));
        match scanner.next_token()? {
            Tok::Comma => {}
            Tok::RParen => break,
            _ => return None,
        }
    }
    Some(overrides)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tok<'a> {
    Ident(&'a str),
    Str(&'a str),
    LParen,
    RParen,
    Dot,
    Comma,
    Semicolon,
    Eof,
}

struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    fn skip_ws(&mut self) {
        let bytes = self.bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn peek_token(&mut self) -> Option<Tok<'a>> {
        let saved = self.pos;
        let tok = self.next_token();
        self.pos = saved;
        tok
    }

    // Returns None only on a scan error (unterminated string, stray byte).
    fn next_token(&mut self) -> Option<Tok<'a>> {
        self.skip_ws();
        let bytes = self.bytes();
        if self.pos >= bytes.len() {
            return Some(Tok::Eof);
        }
        let start = self.pos;
        match bytes[self.pos] {
            b'(' => {
                self.pos += 1;
                Some(Tok::LParen)
            }
            b')' => {
                self.pos += 1;
                Some(Tok::RParen)
            }
            b'.' => {
                self.pos += 1;
                Some(Tok::Dot)
            }
            b',' => {
                self.pos += 1;
                Some(Tok::Comma)
            }
            b';' => {
                self.pos += 1;
                Some(Tok::Semicolon)
            }
            b'"' => {
                self.pos += 1;
                while self.pos < bytes.len() && bytes[self.pos] != b'"' {
                    if bytes[self.pos] == b'\\' {
                        self.pos += 1;
                    }
                    self.pos += 1;
                }
                if self.pos >= bytes.len() {
                    return None;
                }
                self.pos += 1;
                Some(Tok::Str(&self.text[start + 1..self.pos - 1]))
            }
            c if c.is_ascii_alphabetic() || c == b'_' => {
                while self.pos < bytes.len()
                    && (bytes[self.pos].is_ascii_alphanumeric()
                        || bytes[self.pos] == b'_'
                        || bytes[self.pos] == b'$')
                {
                    self.pos += 1;
                }
                Some(Tok::Ident(&self.text[start..self.pos]))
            }
            _ => None,
        }
    }

    // Capture raw text up to the `)` matching an already-consumed `(`.
    fn balanced_until_close(&mut self) -> Option<&'a str> {
        let start = self.pos;
        let bytes = self.bytes();
        let mut depth = 0u32;
        while self.pos < bytes.len() {
            match bytes[self.pos] {
                b'(' => depth += 1,
                b')' => {
                    if depth == 0 {
                        let expr = &self.text[start..self.pos];
                        self.pos += 1;
                        return Some(expr);
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.pos += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pattern_with_overrides() {
        let records = parse_comment(
            "/* bar AUTO_TEMPLATE \"some_regex\" (\n   .i1(in_a),\n   .o2(out_b)\n ); */",
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pattern, "bar");
        assert_eq!(records[0].regex.as_deref(), Some("some_regex"));
        assert_eq!(records[0].override_for("i1"), Some("in_a"));
        assert_eq!(records[0].override_for("o2"), Some("out_b"));
        assert_eq!(records[0].override_for("io"), None);
    }

    #[test]
    fn shared_connection_list_applies_to_pending_patterns() {
        let records = parse_comment(
            "/* qux AUTO_TEMPLATE\n quux AUTO_TEMPLATE\n bar AUTO_TEMPLATE \".*\" (\n .i1(in_a),\n .o2(out_b)); */",
        )
        .unwrap();
        assert_eq!(records.len(), 3);
        for rec in &records {
            assert_eq!(rec.override_for("i1"), Some("in_a"));
            assert_eq!(rec.override_for("o2"), Some("out_b"));
        }
        assert_eq!(records[2].regex.as_deref(), Some(".*"));
        assert_eq!(records[0].regex, None);
    }

    #[test]
    fn pattern_without_any_list_has_no_overrides() {
        let records = parse_comment("/* qux AUTO_TEMPLATE */").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pattern, "qux");
        assert!(records[0].overrides.is_empty());
    }

    #[test]
    fn later_list_does_not_reopen_satisfied_patterns() {
        let records = parse_comment(
            "/* a AUTO_TEMPLATE (.x(p));\n b AUTO_TEMPLATE (.y(q)); */",
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].override_for("x"), Some("p"));
        assert_eq!(records[0].override_for("y"), None);
        assert_eq!(records[1].override_for("y"), Some("q"));
    }

    #[test]
    fn expression_text_is_verbatim() {
        let records =
            parse_comment("/* bar AUTO_TEMPLATE ( .d(data[7:0]), .f(f(x, y)) ); */").unwrap();
        assert_eq!(records[0].override_for("d"), Some("data[7:0]"));
        assert_eq!(records[0].override_for("f"), Some("f(x, y)"));
    }

    #[test]
    fn malformed_bodies_are_rejected() {
        assert_eq!(parse_comment("/* AUTO_TEMPLATE */"), None);
        assert_eq!(parse_comment("/* bar AUTO_TEMPLATE ( .x ); */"), None);
        assert_eq!(parse_comment("/* bar AUTO_TEMPLATE \"unterminated */"), None);
        assert_eq!(parse_comment("/* bar NOT_A_TEMPLATE */"), None);
        assert_eq!(parse_comment("/* */"), None);
    }
}
