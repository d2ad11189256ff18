//! Layout rules for the line-oriented variant.
//!
//! Statements stay on the lines they were written on. Each line is classified as a
//! block opener, a block closer, a middle clause (`Else`, `Case`, `Catch`, …) or a
//! plain statement, which drives its indentation; tokens within a line get
//! normalized spacing.

use super::layout::{collect_items, fuses, Item, LineWriter};
use super::{ends_with_newline, FormattingOptions};
use crate::syntax::{SyntaxToken, SyntaxTree, TokenKind, BASIC_OPERATORS};

const MODIFIERS: &[&str] = &[
    "public", "private", "protected", "friend", "shared", "overrides", "overridable",
    "mustoverride", "notoverridable", "overloads", "shadows", "partial", "readonly", "writeonly",
    "mustinherit", "notinheritable", "async", "iterator", "default", "static", "widening",
    "narrowing", "withevents",
];

/// Words that may follow `End` to close a block.
const END_BLOCKS: &[&str] = &[
    "if", "sub", "function", "class", "module", "namespace", "structure", "interface", "enum",
    "property", "get", "set", "select", "try", "with", "using", "synclock", "while", "operator",
    "event", "addhandler", "removehandler", "raiseevent",
];

/// Keywords written directly against their argument list.
const CALL_KEYWORDS: &[&str] = &[
    "new", "ctype", "directcast", "trycast", "gettype", "getxmlnamespace", "cbool", "cbyte",
    "cchar", "cdate", "cdbl", "cdec", "cint", "clng", "cobj", "csbyte", "cshort", "csng", "cstr",
    "cuint", "culng", "cushort", "function", "sub", "me", "mybase", "myclass",
];

const SPACED_OPERATORS: &[&str] = &["<>", "<=", ">=", "+=", "-=", "*=", "/=", "\\=", "&=", "^="];

/// Line endings that continue the statement on the next line.
const CONTINUATION_WORDS: &[&str] = &["and", "andalso", "or", "orelse", "xor"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Type,
    Interface,
    Member,
    Property,
    Event,
    Select,
    Statement,
}

impl Block {
    fn width(&self) -> usize {
        match self {
            // `Select Case` indents its `Case` clauses and their bodies.
            Block::Select => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Open(Block),
    Close,
    Middle,
    Plain,
}

/// One source line of significant tokens.
struct SourceLine<'a, 't> {
    items: &'a [Item<'t>],
    /// Line breaks before the line in the source.
    breaks: usize,
}

impl<'a, 't> SourceLine<'a, 't> {
    fn first(&self) -> &'t SyntaxToken {
        self.items[0].token
    }

    fn code(&self) -> Vec<&'t SyntaxToken> {
        self.items
            .iter()
            .map(|item| item.token)
            .filter(|token| !token.kind.is_comment())
            .collect()
    }
}

pub(crate) fn format(tree: &SyntaxTree, options: &FormattingOptions) -> String {
    let items = collect_items(tree.tokens());
    let lines = split_lines(&items);
    let heads: Vec<Option<String>> = lines.iter().map(|line| head_word(&line.code(), 0)).collect();

    let mut writer = LineWriter::new(options);
    let mut stack: Vec<Block> = Vec::new();
    let mut statement_level = 0;
    let mut continues = false;

    for (index, line) in lines.iter().enumerate() {
        let code = line.code();
        let is_directive = line.first().is(TokenKind::Directive);

        let level = if is_directive {
            0
        } else if code.is_empty() {
            depth(&stack)
        } else if continues {
            statement_level + 1
        } else {
            let next_head = heads[index + 1..].iter().flatten().next().map(String::as_str);
            let level = match classify(&code, stack.last().copied(), next_head) {
                LineKind::Close => {
                    stack.pop();
                    depth(&stack)
                }
                LineKind::Middle => depth(&stack).saturating_sub(1),
                LineKind::Open(block) => {
                    let level = depth(&stack);
                    stack.push(block);
                    level
                }
                LineKind::Plain => depth(&stack),
            };
            statement_level = level;
            level
        };

        if index == 0 {
            writer.indent(level);
        } else {
            writer.break_lines(line.breaks.clamp(1, 2), level);
        }
        render_line(&mut writer, line.items);

        if !is_directive && !code.is_empty() {
            continues = ends_with_continuation(&code);
        }
    }

    writer.finish(ends_with_newline(tree.text()))
}

fn depth(stack: &[Block]) -> usize {
    stack.iter().map(Block::width).sum()
}

fn split_lines<'a, 't>(items: &'a [Item<'t>]) -> Vec<SourceLine<'a, 't>> {
    let mut lines = Vec::new();
    let mut start = 0;
    for index in 1..=items.len() {
        if index == items.len() || items[index].breaks > 0 {
            if start < index {
                lines.push(SourceLine {
                    items: &items[start..index],
                    breaks: items[start].breaks,
                });
            }
            start = index;
        }
    }
    lines
}

/// Tokens of a statement after any leading attribute block and modifiers.
fn statement_head<'c, 't>(code: &'c [&'t SyntaxToken]) -> &'c [&'t SyntaxToken] {
    let mut rest = code;
    if rest.first().is_some_and(|t| t.is_punct('<')) {
        let mut depth = 0usize;
        for (index, token) in rest.iter().enumerate() {
            if token.is_punct('<') {
                depth += 1;
            } else if token.is_punct('>') {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    rest = &rest[index + 1..];
                    break;
                }
            }
        }
    }
    let skip = rest
        .iter()
        .take_while(|token| is_word_in(token, MODIFIERS))
        .count();
    &rest[skip..]
}

fn head_word(code: &[&SyntaxToken], position: usize) -> Option<String> {
    statement_head(code)
        .get(position)
        .filter(|token| token.kind.is_word())
        .map(|token| token.text.to_ascii_lowercase())
}

fn is_word_in(token: &SyntaxToken, words: &[&str]) -> bool {
    token.kind.is_word() && words.iter().any(|word| token.text.eq_ignore_ascii_case(word))
}

fn classify(code: &[&SyntaxToken], enclosing: Option<Block>, next_head: Option<&str>) -> LineKind {
    let Some(first) = head_word(code, 0) else {
        return LineKind::Plain;
    };
    let second = head_word(code, 1);
    let has = |word: &str| code.iter().any(|token| token.is_word_ignore_case(word));
    let in_interface = enclosing == Some(Block::Interface);

    match first.as_str() {
        "end" => match second.as_deref() {
            Some(word) if END_BLOCKS.contains(&word) => LineKind::Close,
            _ => LineKind::Plain,
        },
        "next" | "loop" | "wend" | "endif" => LineKind::Close,
        "else" | "elseif" | "catch" | "finally" | "case" => LineKind::Middle,
        "namespace" | "module" | "class" | "structure" | "enum" => LineKind::Open(Block::Type),
        "interface" => LineKind::Open(Block::Interface),
        "sub" | "function" | "operator" => {
            if in_interface || has("mustoverride") {
                LineKind::Plain
            } else {
                LineKind::Open(Block::Member)
            }
        }
        "property" => {
            if !in_interface && !has("mustoverride") && matches!(next_head, Some("get" | "set")) {
                LineKind::Open(Block::Property)
            } else {
                LineKind::Plain
            }
        }
        "get" | "set" if enclosing == Some(Block::Property) => LineKind::Open(Block::Member),
        "custom" if second.as_deref() == Some("event") => LineKind::Open(Block::Event),
        "addhandler" | "removehandler" | "raiseevent" if enclosing == Some(Block::Event) => {
            LineKind::Open(Block::Member)
        }
        "if" => {
            if code.last().is_some_and(|token| token.is_word_ignore_case("then")) {
                LineKind::Open(Block::Statement)
            } else {
                LineKind::Plain
            }
        }
        "select" => LineKind::Open(Block::Select),
        "for" | "while" | "do" | "try" | "with" | "using" | "synclock" => {
            LineKind::Open(Block::Statement)
        }
        _ if opens_lambda(code) => LineKind::Open(Block::Member),
        _ => LineKind::Plain,
    }
}

/// A multi-line lambda header ends its line, as in `Dim g = Sub()` or
/// `Function(x) As Integer`; a single-line lambda carries its body after `)`.
fn opens_lambda(code: &[&SyntaxToken]) -> bool {
    let Some(start) = code
        .iter()
        .rposition(|token| is_word_in(token, &["sub", "function"]))
    else {
        return false;
    };
    if !code.get(start + 1).is_some_and(|token| token.is_punct('(')) {
        return false;
    }
    let mut depth = 0usize;
    for (offset, token) in code[start + 1..].iter().enumerate() {
        if token.is_punct('(') {
            depth += 1;
        } else if token.is_punct(')') {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                let rest = &code[start + offset + 2..];
                return rest.first().is_none_or(|token| token.is_word_ignore_case("as"));
            }
        }
    }
    false
}

fn ends_with_continuation(code: &[&SyntaxToken]) -> bool {
    code.last().is_some_and(|token| {
        token.text == "_"
            || matches!(token.kind, TokenKind::Punctuation(',' | '(' | '{' | '&' | '+' | '='))
            || matches!(token.kind, TokenKind::Operator(op) if SPACED_OPERATORS.contains(&op) || op == ":=")
            || is_word_in(token, CONTINUATION_WORDS)
    })
}

fn render_line(writer: &mut LineWriter<'_>, items: &[Item<'_>]) {
    for (index, item) in items.iter().enumerate() {
        if index > 0 && needs_space(&items[index - 1], item) {
            writer.push_space();
        }
        let token = item.token;
        if token.is(TokenKind::Directive) || token.kind.is_comment() {
            writer.push_token(token.text.trim_end());
        } else {
            writer.push_token(&token.text);
        }
    }
}

fn needs_space(prev: &Item<'_>, item: &Item<'_>) -> bool {
    let (p, c) = (prev.token, item.token);

    if c.kind.is_comment() {
        return true;
    }
    if c.is_punct(',') || c.is_punct(')') || p.is_punct('(') {
        return false;
    }
    if c.is_operator(":=") || p.is_operator(":=") {
        return false;
    }
    if p.is_punct(',') {
        return true;
    }
    if is_spaced_operator(c) || is_spaced_operator(p) {
        return true;
    }
    if p.is_punct('.') {
        return false;
    }
    if c.is_punct('.')
        && (p.is(TokenKind::Identifier) || p.is_punct(')') || is_word_in(p, &["me", "mybase", "myclass", "global"]))
    {
        return false;
    }
    if c.is_punct('(') {
        if p.is(TokenKind::Identifier) || p.is_punct(')') || is_word_in(p, CALL_KEYWORDS) {
            return false;
        }
        return item.spaced;
    }
    if p.kind.is_word() && c.kind.is_word() {
        return true;
    }
    item.spaced || fuses(p, c, BASIC_OPERATORS)
}

fn is_spaced_operator(token: &SyntaxToken) -> bool {
    token.is_punct('=')
        || token.is_punct('&')
        || matches!(token.kind, TokenKind::Operator(op) if SPACED_OPERATORS.contains(&op))
}
