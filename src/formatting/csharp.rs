//! Layout rules for the brace-delimited variant.
//!
//! Braces are first classified as *block* braces (own lines, Allman style) or
//! *inline* braces (accessor lists, initializers, patterns). The layout pass then
//! decides, per significant token, how many line breaks precede it, its indentation
//! when it starts a line, and whether a space separates it from its predecessor.
//! Symbols such as `+` and `<` are spaced only when they act as binary operators.

use super::layout::{collect_items, fuses, Item, LineWriter};
use super::{ends_with_newline, FormattingOptions};
use crate::syntax::{SyntaxToken, SyntaxTree, TokenKind, CSHARP_OPERATORS};

const CONTROL_KEYWORDS: &[&str] = &[
    "if", "for", "foreach", "while", "switch", "catch", "using", "lock", "fixed", "when",
];

/// Keywords written directly against their argument list.
const CALL_KEYWORDS: &[&str] = &[
    "this", "base", "typeof", "sizeof", "default", "checked", "unchecked", "new",
];

const BUILTIN_TYPES: &[&str] = &[
    "bool", "byte", "char", "decimal", "double", "float", "int", "long", "object", "sbyte",
    "short", "string", "uint", "ulong", "ushort",
];

const SPACED_OPERATORS: &[&str] = &[
    "==", "!=", "<=", ">=", "&&", "||", "=>", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
    "<<=", ">>=", "??", "??=", "<<",
];

/// Operands after which an ambiguous symbol is a binary operator.
const OPERAND_KEYWORDS: &[&str] = &["this", "base", "true", "false", "null"];

const ACCESSORS: &[&str] = &["get", "set", "init", "add", "remove"];
const ACCESSOR_MODIFIERS: &[&str] = &["private", "protected", "internal", "public"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BraceClass {
    Block,
    Inline,
}

/// How an ambiguous operator symbol is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OperatorRole {
    Other,
    Binary,
    /// Second `>` of a right shift, written against the first.
    ShiftTail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Brace {
    class: BraceClass,
    /// Body of a `switch` statement.
    is_switch: bool,
    /// Auto-property accessor list such as `{ get; set; }`.
    accessors: bool,
}

pub(crate) fn format(tree: &SyntaxTree, options: &FormattingOptions) -> String {
    let items = collect_items(tree.tokens());
    let braces = classify_braces(&items);
    let roles = classify_operators(&items);
    let mut writer = LineWriter::new(options);
    let mut state = LayoutState::default();

    for (index, item) in items.iter().enumerate() {
        let token = item.token;
        let brace = braces[index];

        if index == 0 {
            state.line_first = Some(token);
        } else {
            let prev = &items[index - 1];
            let breaks = line_breaks(prev, item, braces[index - 1], brace, state.statement_ended);
            if breaks > 0 {
                let level = state.indent_level(&items, index);
                writer.break_lines(breaks, level);
                state.line_first = Some(token);
            } else if needs_space(prev, item, (braces[index - 1], brace), (roles[index - 1], roles[index])) {
                writer.push_space();
            }
        }

        if token.is(TokenKind::Directive) || token.kind.is_comment() {
            writer.push_token(token.text.trim_end());
        } else {
            writer.push_token(&token.text);
            state.advance(token, brace);
        }
    }

    writer.finish(ends_with_newline(tree.text()))
}

fn is_code(token: &SyntaxToken) -> bool {
    !token.kind.is_comment() && !token.is(TokenKind::Directive)
}

fn is_keyword(token: &SyntaxToken, words: &[&str]) -> bool {
    token.is(TokenKind::Keyword) && words.contains(&token.text.as_str())
}

fn is_word_in(token: &SyntaxToken, words: &[&str]) -> bool {
    token.kind.is_word() && words.contains(&token.text.as_str())
}

fn is_block(brace: Option<Brace>) -> bool {
    brace.is_some_and(|b| b.class == BraceClass::Block)
}

fn is_inline(brace: Option<Brace>) -> bool {
    brace.is_some_and(|b| b.class == BraceClass::Inline)
}

fn is_accessor_list_brace(brace: Option<Brace>) -> bool {
    brace.is_some_and(|b| b.accessors)
}

fn is_line_comment(token: &SyntaxToken) -> bool {
    token.is(TokenKind::DocComment) || (token.is(TokenKind::Comment) && token.text.starts_with("//"))
}

fn is_doc_comment(token: &SyntaxToken) -> bool {
    token.is(TokenKind::DocComment) || (token.is(TokenKind::Comment) && token.text.starts_with("///"))
}

fn is_case_label_start(token: &SyntaxToken) -> bool {
    is_keyword(token, &["case", "default"])
}

/// Statement scope used while classifying braces.
#[derive(Debug, Clone, Copy)]
struct Scope {
    class: BraceClass,
    /// Open parentheses and brackets inside this scope.
    depth: usize,
    /// The current statement has reached an expression position.
    expression: bool,
    /// Index of the first token of the current statement.
    first: Option<usize>,
    accessors: bool,
}

impl Scope {
    fn new(class: BraceClass, accessors: bool) -> Self {
        Self {
            class,
            depth: 0,
            expression: false,
            first: None,
            accessors,
        }
    }

    fn end_statement(&mut self) {
        self.expression = false;
        self.first = None;
    }
}

fn classify_braces(items: &[Item<'_>]) -> Vec<Option<Brace>> {
    let code: Vec<usize> = (0..items.len()).filter(|&i| is_code(items[i].token)).collect();
    let mut braces = vec![None; items.len()];
    let mut scopes = vec![Scope::new(BraceClass::Block, false)];

    for (position, &index) in code.iter().enumerate() {
        let token = items[index].token;
        let prev = position.checked_sub(1).map(|p| items[code[p]].token);
        let Some(scope) = scopes.last_mut() else {
            break;
        };

        match token.kind {
            TokenKind::Punctuation('{') => {
                let accessors = is_accessor_list(items, &code[position + 1..]);
                let class = if prev.is_some_and(|p| p.is_operator("=>")) {
                    BraceClass::Block
                } else if accessors {
                    BraceClass::Inline
                } else if scope.class == BraceClass::Inline || scope.depth > 0 || scope.expression {
                    BraceClass::Inline
                } else {
                    BraceClass::Block
                };
                let is_switch = class == BraceClass::Block
                    && scope
                        .first
                        .is_some_and(|first| is_keyword(items[first].token, &["switch"]));
                braces[index] = Some(Brace {
                    class,
                    is_switch,
                    accessors,
                });
                scopes.push(Scope::new(class, accessors));
            }
            TokenKind::Punctuation('}') => {
                let closed = if scopes.len() > 1 {
                    scopes.pop()
                } else {
                    None
                };
                let class = closed.map_or(BraceClass::Block, |scope| scope.class);
                let accessors = closed.is_some_and(|scope| scope.accessors);
                braces[index] = Some(Brace {
                    class,
                    is_switch: false,
                    accessors,
                });
                if class == BraceClass::Block || accessors {
                    if let Some(parent) = scopes.last_mut() {
                        parent.end_statement();
                    }
                }
            }
            TokenKind::Punctuation(';') if scope.depth == 0 => scope.end_statement(),
            TokenKind::Punctuation(':')
                if scope.depth == 0
                    && scope.first.is_some_and(|first| is_case_label_start(items[first].token)) =>
            {
                scope.end_statement()
            }
            _ => {
                if scope.first.is_none() {
                    scope.first = Some(index);
                }
                match token.kind {
                    TokenKind::Punctuation('(' | '[') => scope.depth += 1,
                    TokenKind::Punctuation(')' | ']') => scope.depth = scope.depth.saturating_sub(1),
                    _ if scope.depth == 0 && is_expression_marker(token) => scope.expression = true,
                    _ => {}
                }
            }
        }
    }

    braces
}

fn classify_operators(items: &[Item<'_>]) -> Vec<OperatorRole> {
    let code: Vec<usize> = (0..items.len()).filter(|&i| is_code(items[i].token)).collect();
    let mut generic = vec![false; items.len()];
    for (position, &index) in code.iter().enumerate() {
        let after_name = position
            .checked_sub(1)
            .is_some_and(|p| items[code[p]].token.is(TokenKind::Identifier));
        if items[index].token.is_punct('<') && after_name && !generic[index] {
            for angle in type_argument_list(items, &code[position..]).unwrap_or_default() {
                generic[angle] = true;
            }
        }
    }

    let mut roles = vec![OperatorRole::Other; items.len()];
    for (position, &index) in code.iter().enumerate().skip(1) {
        let token = items[index].token;
        if generic[index] || !is_binary_candidate(token) {
            continue;
        }
        let prev_index = code[position - 1];
        let prev = items[prev_index].token;
        let item = &items[index];
        roles[index] = if token.is_punct('>')
            && prev.is_punct('>')
            && roles[prev_index] == OperatorRole::Binary
            && prev_index + 1 == index
            && item.breaks == 0
            && !item.spaced
        {
            OperatorRole::ShiftTail
        } else if is_operand(prev) {
            OperatorRole::Binary
        } else {
            OperatorRole::Other
        };
    }
    roles
}

fn is_binary_candidate(token: &SyntaxToken) -> bool {
    matches!(
        token.kind,
        TokenKind::Punctuation('+' | '-' | '*' | '/' | '%' | '<' | '>' | '&' | '|' | '^')
    )
}

fn is_operand(token: &SyntaxToken) -> bool {
    matches!(
        token.kind,
        TokenKind::Identifier
            | TokenKind::Number
            | TokenKind::String
            | TokenKind::Char
            | TokenKind::Punctuation(')' | ']')
    ) || is_keyword(token, OPERAND_KEYWORDS)
}

/// Indices of the angle brackets of a type argument list starting at `following[0]`,
/// or `None` when the `<` is a comparison.
fn type_argument_list(items: &[Item<'_>], following: &[usize]) -> Option<Vec<usize>> {
    let mut angles = Vec::new();
    let mut depth = 0usize;
    let mut parens = 0usize;

    for (offset, &index) in following.iter().enumerate() {
        let token = items[index].token;
        match token.kind {
            TokenKind::Punctuation('<') => {
                depth += 1;
                angles.push(index);
            }
            TokenKind::Punctuation('>') => {
                depth = depth.saturating_sub(1);
                angles.push(index);
                if depth == 0 {
                    let next = following.get(offset + 1).map(|&i| items[i].token);
                    let literal = next.is_some_and(|t| {
                        matches!(t.kind, TokenKind::Number | TokenKind::String | TokenKind::Char)
                    });
                    return (!literal).then_some(angles);
                }
            }
            TokenKind::Punctuation('(') => parens += 1,
            TokenKind::Punctuation(')') if parens > 0 => parens -= 1,
            TokenKind::Punctuation(',' | '.' | '?' | '[' | ']') | TokenKind::Identifier => {}
            TokenKind::Operator("::") => {}
            TokenKind::Keyword if BUILTIN_TYPES.contains(&token.text.as_str()) => {}
            _ => return None,
        }
    }
    None
}

/// `{ get; set; }` and friends: only accessor names, their modifiers and semicolons.
fn is_accessor_list(items: &[Item<'_>], following: &[usize]) -> bool {
    let mut saw_accessor = false;
    for &index in following {
        let token = items[index].token;
        if token.is_punct('}') {
            return saw_accessor;
        }
        if token.is_punct(';') || is_word_in(token, ACCESSOR_MODIFIERS) {
            continue;
        }
        if is_word_in(token, ACCESSORS) {
            saw_accessor = true;
            continue;
        }
        return false;
    }
    false
}

/// Tokens after which a `{` opens an initializer rather than a block.
fn is_expression_marker(token: &SyntaxToken) -> bool {
    match token.kind {
        TokenKind::Punctuation('=') => true,
        TokenKind::Operator(op) => {
            op == "=>" || (op.ends_with('=') && !matches!(op, "==" | "!=" | "<=" | ">="))
        }
        TokenKind::Keyword => matches!(token.text.as_str(), "return" | "throw"),
        _ => false,
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    is_switch: bool,
    inline: bool,
    /// Paren depth of the enclosing frame, restored when this frame closes.
    outer_depth: usize,
}

#[derive(Debug, Default)]
struct LayoutState<'t> {
    frames: Vec<Frame>,
    depth: usize,
    /// Whether the previous code token ends a statement-like unit. `None` before any code.
    prev_terminates: Option<bool>,
    /// The previous code token completed a statement or member.
    statement_ended: bool,
    line_first: Option<&'t SyntaxToken>,
}

impl<'t> LayoutState<'t> {
    fn advance(&mut self, token: &SyntaxToken, brace: Option<Brace>) {
        let line_starts_with = |f: fn(&SyntaxToken) -> bool| self.line_first.is_some_and(f);
        let terminates = match token.kind {
            TokenKind::Punctuation('{') => {
                self.frames.push(Frame {
                    is_switch: brace.is_some_and(|b| b.is_switch),
                    inline: is_inline(brace),
                    outer_depth: self.depth,
                });
                self.depth = 0;
                true
            }
            TokenKind::Punctuation('}') => {
                if let Some(frame) = self.frames.pop() {
                    self.depth = frame.outer_depth;
                }
                !is_inline(brace) || is_accessor_list_brace(brace)
            }
            TokenKind::Punctuation('(' | '[') => {
                self.depth += 1;
                false
            }
            TokenKind::Punctuation(')') => {
                self.depth = self.depth.saturating_sub(1);
                false
            }
            TokenKind::Punctuation(']') => {
                self.depth = self.depth.saturating_sub(1);
                self.depth == 0 && line_starts_with(|first| first.is_punct('['))
            }
            TokenKind::Punctuation(';') => true,
            TokenKind::Punctuation(',') => self.depth == 0,
            TokenKind::Punctuation(':') => line_starts_with(is_case_label_start),
            _ => false,
        };
        self.statement_ended = match token.kind {
            TokenKind::Punctuation(';') => {
                self.depth == 0 && !self.frames.last().is_some_and(|frame| frame.inline)
            }
            TokenKind::Punctuation('}') => is_accessor_list_brace(brace),
            _ => false,
        };
        self.prev_terminates = Some(terminates);
    }

    /// Indentation level for a line starting with `items[index]`.
    fn indent_level(&self, items: &[Item<'_>], index: usize) -> usize {
        let token = items[index].token;
        let switches = |frames: &[Frame]| frames.iter().filter(|f| f.is_switch).count();

        if token.is(TokenKind::Directive) {
            let text = token.text.trim_start();
            return if text.starts_with("#region") || text.starts_with("#endregion") {
                self.frames.len() + switches(&self.frames)
            } else {
                0
            };
        }

        let closing = token.is_punct('}') && !self.frames.is_empty();
        let open = if closing {
            &self.frames[..self.frames.len() - 1]
        } else {
            &self.frames[..]
        };

        let mut level = open.len() + switches(open);
        if open.last().is_some_and(|f| f.is_switch) && is_case_label(items, index) {
            level = level.saturating_sub(1);
        }
        let is_brace = token.is_punct('{') || token.is_punct('}');
        if !is_brace && self.prev_terminates == Some(false) {
            level += 1;
        }
        level
    }
}

fn is_case_label(items: &[Item<'_>], index: usize) -> bool {
    let token = items[index].token;
    if is_keyword(token, &["case"]) {
        return true;
    }
    is_keyword(token, &["default"])
        && items[index + 1..]
            .iter()
            .find(|item| is_code(item.token))
            .is_some_and(|item| item.token.is_punct(':'))
}

fn line_breaks(
    prev: &Item<'_>,
    item: &Item<'_>,
    prev_brace: Option<Brace>,
    brace: Option<Brace>,
    statement_ended: bool,
) -> usize {
    let (p, token) = (prev.token, item.token);
    let trailing_comment = token.kind.is_comment() && !is_doc_comment(token) && item.breaks == 0;

    let forced = is_line_comment(p)
        || (statement_ended && !trailing_comment && !token.is_punct('='))
        || p.is(TokenKind::Directive)
        || token.is(TokenKind::Directive)
        || is_block(brace)
        || (p.is_punct('{') && is_block(prev_brace) && !trailing_comment)
        || (p.is_punct('}')
            && is_block(prev_brace)
            && !trailing_comment
            && !matches!(token.kind, TokenKind::Punctuation(';' | ',' | ')')));

    item.breaks.min(2).max(usize::from(forced))
}

fn needs_space(
    prev: &Item<'_>,
    item: &Item<'_>,
    (prev_brace, brace): (Option<Brace>, Option<Brace>),
    (prev_role, role): (OperatorRole, OperatorRole),
) -> bool {
    let (p, c) = (prev.token, item.token);

    if c.kind.is_comment() || p.kind.is_comment() {
        return true;
    }
    if matches!(c.kind, TokenKind::Punctuation(';' | ',' | ')' | ']')) {
        return false;
    }
    if p.is_punct('(') || p.is_punct('[') {
        return false;
    }
    if p.is_punct(',') || p.is_punct(';') {
        return true;
    }
    if is_inline(brace) || (p.is_punct('{') && is_inline(prev_brace)) {
        return true;
    }
    if role == OperatorRole::ShiftTail {
        return false;
    }
    if role == OperatorRole::Binary || prev_role != OperatorRole::Other {
        return true;
    }
    if is_member_access(c) || is_member_access(p) {
        return false;
    }
    if is_spaced_operator(c) || is_spaced_operator(p) {
        return true;
    }
    if c.is_punct('(') {
        return space_before_paren(p, item.spaced);
    }
    if c.is_punct('[')
        && (p.is(TokenKind::Identifier)
            || p.is_punct(')')
            || p.is_punct(']')
            || p.is_punct('?')
            || is_keyword(p, BUILTIN_TYPES))
    {
        return false;
    }
    if p.kind.is_word() && c.kind.is_word() {
        return true;
    }
    if (p.is_punct(']') || p.is_punct('>')) && c.kind.is_word() {
        return true;
    }
    item.spaced || fuses(p, c, CSHARP_OPERATORS)
}

fn is_member_access(token: &SyntaxToken) -> bool {
    token.is_punct('.') || token.is_operator("?.") || token.is_operator("::") || token.is_operator("->")
}

fn is_spaced_operator(token: &SyntaxToken) -> bool {
    token.is_punct('=') || matches!(token.kind, TokenKind::Operator(op) if SPACED_OPERATORS.contains(&op))
}

fn space_before_paren(prev: &SyntaxToken, spaced: bool) -> bool {
    if is_word_in(prev, CONTROL_KEYWORDS) {
        return true;
    }
    if prev.is(TokenKind::Identifier) || prev.is_punct(')') || prev.is_punct(']') {
        return false;
    }
    if prev.is(TokenKind::Keyword) {
        return !CALL_KEYWORDS.contains(&prev.text.as_str());
    }
    spaced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ParseOptions;
    use crate::core::LanguageVariant;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn fmt(source: &str) -> String {
        let tree = SyntaxTree::parse(
            Arc::from(source),
            "Test.cs",
            &ParseOptions::baseline(LanguageVariant::CSharp),
        );
        format(&tree, &FormattingOptions::default())
    }

    #[test]
    fn test_empty_class_gets_block_braces() {
        assert_eq!(fmt("class C{}"), "class C\n{\n}");
    }

    #[test]
    fn test_members_and_statements_are_indented() {
        let source = "namespace N{class C{int x=1;void M(int a,int b){if(a==b){return;}M( a , b );}}}\n";
        let expected = indoc! {"
            namespace N
            {
                class C
                {
                    int x = 1;
                    void M(int a, int b)
                    {
                        if (a == b)
                        {
                            return;
                        }
                        M(a, b);
                    }
                }
            }
        "};
        assert_eq!(fmt(source), expected);
    }

    #[test]
    fn test_accessor_lists_and_initializers_stay_inline() {
        let source = "class C{public int X{get;set;}int[] a=new[]{1,2};}";
        let expected = indoc! {"
            class C
            {
                public int X { get; set; }
                int[] a = new[] { 1, 2 };
            }"};
        assert_eq!(fmt(source), expected);
    }

    #[test]
    fn test_switch_sections_are_indented_below_labels() {
        let source = indoc! {"
            class C
            {
            void M(int x)
            {
            switch (x)
            {
            case 1:
            break;
            default:
            return;
            }
            }
            }
        "};
        let expected = indoc! {"
            class C
            {
                void M(int x)
                {
                    switch (x)
                    {
                        case 1:
                            break;
                        default:
                            return;
                    }
                }
            }
        "};
        assert_eq!(fmt(source), expected);
    }

    #[test]
    fn test_continuation_lines_get_extra_indent() {
        let source = indoc! {"
            class C
            {
            int M() =>
            1 +
            2;
            }"};
        let expected = indoc! {"
            class C
            {
                int M() =>
                    1 +
                    2;
            }"};
        assert_eq!(fmt(source), expected);
    }

    #[test]
    fn test_comments_and_directives() {
        let source = indoc! {"
            #if DEBUG
            class C { // trailing
              #region Fields
                // own line
                int x;
              #endregion
            }
            #endif
        "};
        let expected = indoc! {"
            #if DEBUG
            class C
            { // trailing
                #region Fields
                // own line
                int x;
                #endregion
            }
            #endif
        "};
        assert_eq!(fmt(source), expected);
    }

    #[test]
    fn test_blank_lines_collapse() {
        let source = "\n\nclass C\n{\n    int x;\n\n\n\n    int y;\n}\n\n\n";
        assert_eq!(fmt(source), "class C\n{\n    int x;\n\n    int y;\n}\n");
    }

    #[test]
    fn test_lambda_block_body() {
        let source = "class C{void M(){Run(() =>{Go();});}}";
        let expected = indoc! {"
            class C
            {
                void M()
                {
                    Run(() =>
                    {
                        Go();
                    });
                }
            }"};
        assert_eq!(fmt(source), expected);
    }

    #[test]
    fn test_operators_do_not_fuse() {
        assert_eq!(fmt("int x = a - -b;"), "int x = a - -b;");
        assert_eq!(fmt("var t = List<List<int>>.Empty;"), "var t = List<List<int>>.Empty;");
    }

    #[test]
    fn test_binary_operators_are_spaced() {
        let source = "class C{int y=x+1;bool b=a<b;void M(){return x*2;}}";
        let expected = indoc! {"
            class C
            {
                int y = x + 1;
                bool b = a < b;
                void M()
                {
                    return x * 2;
                }
            }"};
        assert_eq!(fmt(source), expected);
        assert_eq!(fmt("int y = x + 1;"), fmt("int y=x+1;"));
        assert_eq!(fmt("var p=a*b%c-(d/e);"), "var p = a * b % c - (d / e);");
        assert_eq!(fmt("var s=a<<2|b>>1;"), "var s = a << 2 | b >> 1;");
    }

    #[test]
    fn test_unary_operators_and_type_arguments_stay_tight() {
        assert_eq!(fmt("int x=-1;"), "int x = -1;");
        assert_eq!(fmt("var f=a[i-1]&-b;"), "var f = a[i - 1] & -b;");
        assert_eq!(fmt("List<int> x=new List<int>();"), "List<int> x = new List<int>();");
        assert_eq!(
            fmt("var m=Map<string,List<int[]>>(k);"),
            "var m = Map<string, List<int[]>>(k);"
        );
        assert_eq!(fmt("bool b=i<n&&j>0;"), "bool b = i < n && j > 0;");
    }

    #[test]
    fn test_doc_comment_after_block_brace_starts_its_own_line() {
        let source = "namespace N{class C{/// <summary>x</summary>\nvoid M(){}}}";
        let expected = indoc! {"
            namespace N
            {
                class C
                {
                    /// <summary>x</summary>
                    void M()
                    {
                    }
                }
            }"};
        assert_eq!(fmt(source), expected);
        assert_eq!(fmt(expected), expected);
    }

    #[test]
    fn test_mid_line_directive_moves_to_column_zero() {
        let once = fmt("{#if X\nclass");
        assert_eq!(once, "{\n#if X\n    class");
        assert_eq!(fmt(&once), once);
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let sources = [
            "class C{public int X{get;set;}void M(){switch(x){case 1:{break;}}}}",
            "namespace N{[Test]class C:Base{C():base(1){}}}",
            "class C{string s=$\"{a}\"+@\"x\ny\";}",
            "class C{int M(int a,int b)=>a>>b+(a-b)*-1;List<List<int>>l;}",
        ];
        for source in sources {
            let once = fmt(source);
            assert_eq!(fmt(&once), once);
        }
    }
}
