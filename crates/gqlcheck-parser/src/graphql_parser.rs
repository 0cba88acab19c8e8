//! Recursive descent parser for GraphQL documents.
//!
//! This module provides [`GraphQLParser`], a generic parser that works with any
//! token source implementing [`GraphQLTokenSource`]. It parses schema (SDL)
//! documents and query (executable) documents with one shared engine.
//!
//! # Architecture
//!
//! The parser keeps exactly one token of lookahead. All token consumption goes
//! through a handful of helpers (`peek`, `next`, `expect`, `expect_keyword`,
//! `skip`, `many`) so that error handling lives in one place.
//!
//! # Error Handling
//!
//! Errors are sticky and first-error-wins:
//! 1. The first error (from the lexer or from a grammar rule) is stored in the
//!    parser's single error slot; later errors are dropped.
//! 2. From then on `peek()`/`next()` return the last consumed token instead of
//!    reading input, `skip()` always fails, and every `parse_*` method
//!    degrades to returning a zero-valued (`Default`) node.
//! 3. Loops check the error slot at their boundaries, so grammar rules compose
//!    without per-step error checks. The slot is inspected once at the top.

use crate::GraphQLSyntaxError;
use crate::Location;
use crate::ast::Argument;
use crate::ast::Definition;
use crate::ast::DefinitionKind;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::DirectiveLocation;
use crate::ast::EnumValueDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::OperationTypeDefinition;
use crate::ast::QueryDocument;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaDocument;
use crate::ast::Selection;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTokenSpan;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use std::borrow::Cow;

/// Placeholder used to ask for "any `Name` token" in [`GraphQLParser::expect`].
const NAME: GraphQLTokenKind<'static> = GraphQLTokenKind::Name(Cow::Borrowed(""));

/// Parses a schema (SDL) document from a string.
///
/// ```
/// let doc = gqlcheck_parser::parse_schema("type Query { hello: String }").unwrap();
/// assert_eq!(doc.definitions[0].name, "Query");
/// ```
pub fn parse_schema(source: &str) -> Result<SchemaDocument, GraphQLSyntaxError> {
    GraphQLParser::new(source).parse_schema_document()
}

/// Parses a query (executable) document from a string.
///
/// ```
/// let doc = gqlcheck_parser::parse_query("{ hello }").unwrap();
/// assert_eq!(doc.operations.len(), 1);
/// ```
pub fn parse_query(source: &str) -> Result<QueryDocument, GraphQLSyntaxError> {
    GraphQLParser::new(source).parse_query_document()
}

/// A recursive descent parser for GraphQL documents.
///
/// Generic over the token source so that any lexer honoring the
/// [`GraphQLTokenSource`] contract can drive it.
///
/// # Usage
///
/// ```
/// use gqlcheck_parser::GraphQLParser;
///
/// let parser = GraphQLParser::new("type { field: String }");
/// let err = parser.parse_schema_document().unwrap_err();
/// assert_eq!(err.message(), "Expected Name, found {");
/// assert_eq!(err.locations()[0].column, 6);
/// ```
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_source: TTokenSource,

    /// The single token of lookahead, read lazily by `peek()`.
    peeked: Option<GraphQLToken<'src>>,

    /// The most recently consumed token. Returned by `peek()`/`next()` once
    /// an error has been recorded.
    prev: GraphQLToken<'src>,

    /// The sticky error slot.
    error: Option<GraphQLSyntaxError>,

    /// Shared nesting depth of type references, values, and selection sets.
    recursion_depth: usize,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    /// Creates a new parser from a string-like source.
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::new(source.as_ref()))
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Maximum nesting depth for recursive parsing (type references, values,
    /// and selection sets). Deeper input is rejected with a syntax error
    /// rather than risking a stack overflow.
    const MAX_RECURSION_DEPTH: usize = 64;

    /// Creates a new parser from a token source.
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            peeked: None,
            prev: GraphQLToken::new(GraphQLTokenKind::Eof, GraphQLTokenSpan::default()),
            error: None,
            recursion_depth: 0,
        }
    }

    // =========================================================================
    // Token consumption helpers
    // =========================================================================

    fn read_token(&mut self) -> GraphQLToken<'src> {
        match self.token_source.next() {
            Some(token) => token,
            None => {
                let end = self.prev.span.end.clone();
                GraphQLToken::new(GraphQLTokenKind::Eof, GraphQLTokenSpan::new(end.clone(), end))
            },
        }
    }

    /// Returns the next token without consuming it.
    ///
    /// A lexer `Error` token is converted into the sticky error as soon as it
    /// is peeked.
    fn peek(&mut self) -> &GraphQLToken<'src> {
        if self.error.is_some() {
            return &self.prev;
        }

        if self.peeked.is_none() {
            let token = self.read_token();
            if let GraphQLTokenKind::Error { message } = &token.kind {
                self.error = Some(GraphQLSyntaxError::new(message.clone(), token.location()));
                return &self.prev;
            }
            self.peeked = Some(token);
        }

        self.peeked.as_ref().unwrap_or(&self.prev)
    }

    /// Consumes and returns the next token.
    fn next(&mut self) -> GraphQLToken<'src> {
        self.peek();
        if self.error.is_none()
            && let Some(token) = self.peeked.take() {
            self.prev = token;
        }
        self.prev.clone()
    }

    /// Records `message` at `location` unless an error is already recorded.
    fn error_at(&mut self, location: Location, message: impl Into<String>) {
        if self.error.is_none() {
            self.error = Some(GraphQLSyntaxError::new(message, location));
        }
    }

    fn unexpected_error(&mut self) {
        let token = self.peek().clone();
        self.unexpected_token(&token);
    }

    fn unexpected_token(&mut self, token: &GraphQLToken<'_>) {
        self.error_at(token.location(), format!("Unexpected {}", token.kind.describe()));
    }

    /// Consumes a token of the given kind, or records
    /// "Expected X, found Y" at the offending token.
    fn expect(&mut self, kind: GraphQLTokenKind<'static>) -> GraphQLToken<'src> {
        let token = self.peek();
        if token.kind.is_same_kind(&kind) {
            return self.next();
        }

        let location = token.location();
        let found = token.kind.describe();
        self.error_at(location, format!("Expected {}, found {found}", kind.kind_name()));
        self.prev.clone()
    }

    /// Consumes a `Name` token with the exact text `keyword`, or records
    /// an error at the offending token.
    fn expect_keyword(&mut self, keyword: &str) -> GraphQLToken<'src> {
        let token = self.peek();
        if token.is_keyword(keyword) {
            return self.next();
        }

        let location = token.location();
        let found = token.kind.describe();
        self.error_at(location, format!("Expected \"{keyword}\", found {found}"));
        self.prev.clone()
    }

    /// Consumes the next token if it has the given kind. Never records an
    /// error, and always fails once one has been recorded.
    fn skip(&mut self, kind: GraphQLTokenKind<'static>) -> bool {
        if self.error.is_some() || !self.peek().kind.is_same_kind(&kind) {
            return false;
        }
        self.next();
        true
    }

    fn peek_is(&mut self, kind: &GraphQLTokenKind<'static>) -> bool {
        self.error.is_none() && self.peek().kind.is_same_kind(kind)
    }

    fn peek_is_keyword(&mut self, keyword: &str) -> bool {
        self.error.is_none() && self.peek().is_keyword(keyword)
    }

    /// Optional repetition: if `open` is absent this does nothing; otherwise
    /// `body` runs until `close` (which is consumed) or an error.
    fn many(
        &mut self,
        open: GraphQLTokenKind<'static>,
        close: GraphQLTokenKind<'static>,
        mut body: impl FnMut(&mut Self),
    ) {
        if !self.skip(open) {
            return;
        }
        while self.error.is_none() && !self.peek().kind.is_same_kind(&close) {
            body(self);
        }
        self.next();
    }

    fn enter_nested(&mut self) -> bool {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            let location = self.peek().location();
            self.error_at(location, "Maximum nesting depth exceeded");
            return false;
        }
        self.recursion_depth += 1;
        true
    }

    fn exit_nested(&mut self) {
        self.recursion_depth -= 1;
    }

    fn current_location(&mut self) -> Location {
        self.peek().location()
    }

    // =========================================================================
    // Shared productions
    // =========================================================================

    fn parse_name(&mut self) -> String {
        match self.expect(NAME).kind {
            GraphQLTokenKind::Name(name) if self.error.is_none() => name.into_owned(),
            _ => String::new(),
        }
    }

    /// Cooks a string token, recording escape errors at the token.
    fn cook_string(&mut self, token: &GraphQLToken<'_>) -> String {
        match token.kind.parse_string_value() {
            Some(Ok(value)) => value,
            Some(Err(err)) => {
                self.error_at(token.location(), err.to_string());
                String::new()
            },
            None => String::new(),
        }
    }

    fn parse_description(&mut self) -> Option<String> {
        if !matches!(self.peek().kind, GraphQLTokenKind::StringValue(_)) {
            return None;
        }
        let token = self.next();
        Some(self.cook_string(&token))
    }

    /// `NamedType`, `[T]`, and `T!`, nested to any depth.
    fn parse_type_reference(&mut self) -> TypeAnnotation {
        if !self.enter_nested() {
            return TypeAnnotation::default();
        }

        let ty = if self.skip(GraphQLTokenKind::SquareBracketOpen) {
            let inner = self.parse_type_reference();
            self.expect(GraphQLTokenKind::SquareBracketClose);
            TypeAnnotation::List(Box::new(inner))
        } else {
            TypeAnnotation::Named(self.parse_name())
        };
        self.exit_nested();

        if self.skip(GraphQLTokenKind::Bang) {
            TypeAnnotation::NonNull(Box::new(ty))
        } else {
            ty
        }
    }

    fn parse_directives(&mut self, is_const: bool) -> Vec<Directive> {
        let mut directives = Vec::new();
        while self.peek_is(&GraphQLTokenKind::At) {
            directives.push(self.parse_directive(is_const));
        }
        directives
    }

    fn parse_directive(&mut self, is_const: bool) -> Directive {
        let location = self.current_location();
        self.expect(GraphQLTokenKind::At);
        Directive {
            name: self.parse_name(),
            arguments: self.parse_arguments(is_const),
            location,
        }
    }

    fn parse_arguments(&mut self, is_const: bool) -> Vec<Argument> {
        let mut arguments = Vec::new();
        self.many(GraphQLTokenKind::ParenOpen, GraphQLTokenKind::ParenClose, |p| {
            let name = p.parse_name();
            p.expect(GraphQLTokenKind::Colon);
            let value = p.parse_value_literal(is_const);
            arguments.push(Argument { name, value });
        });
        arguments
    }

    /// Parses a value. Variables are rejected when `is_const` is set.
    fn parse_value_literal(&mut self, is_const: bool) -> Value {
        if !self.enter_nested() {
            return Value::default();
        }
        let value = self.parse_value_literal_inner(is_const);
        self.exit_nested();
        value
    }

    fn parse_value_literal_inner(&mut self, is_const: bool) -> Value {
        let token = self.peek().clone();
        match &token.kind {
            GraphQLTokenKind::SquareBracketOpen => {
                let mut items = Vec::new();
                self.many(
                    GraphQLTokenKind::SquareBracketOpen,
                    GraphQLTokenKind::SquareBracketClose,
                    |p| items.push(p.parse_value_literal(is_const)),
                );
                Value::List(items)
            },
            GraphQLTokenKind::CurlyBraceOpen => {
                let mut fields = Vec::new();
                self.many(
                    GraphQLTokenKind::CurlyBraceOpen,
                    GraphQLTokenKind::CurlyBraceClose,
                    |p| {
                        let name = p.parse_name();
                        p.expect(GraphQLTokenKind::Colon);
                        fields.push((name, p.parse_value_literal(is_const)));
                    },
                );
                Value::Object(fields)
            },
            GraphQLTokenKind::Dollar if !is_const => Value::Variable(self.parse_variable()),
            GraphQLTokenKind::IntValue(raw) => {
                self.next();
                Value::Int(raw.to_string())
            },
            GraphQLTokenKind::FloatValue(raw) => {
                self.next();
                Value::Float(raw.to_string())
            },
            GraphQLTokenKind::StringValue(_) => {
                self.next();
                let cooked = self.cook_string(&token);
                if token.kind.is_block_string() {
                    Value::BlockString(cooked)
                } else {
                    Value::String(cooked)
                }
            },
            GraphQLTokenKind::Name(name) => {
                self.next();
                match name.as_ref() {
                    "true" => Value::Boolean(true),
                    "false" => Value::Boolean(false),
                    "null" => Value::Null,
                    _ => Value::Enum(name.to_string()),
                }
            },
            _ => {
                self.unexpected_token(&token);
                Value::default()
            },
        }
    }

    fn parse_variable(&mut self) -> String {
        self.expect(GraphQLTokenKind::Dollar);
        self.parse_name()
    }

    // =========================================================================
    // Schema documents
    // =========================================================================

    /// Parses a schema (SDL) document, consuming the parser.
    pub fn parse_schema_document(mut self) -> Result<SchemaDocument, GraphQLSyntaxError> {
        let mut doc = SchemaDocument::default();

        while self.error.is_none() && !self.peek_is(&GraphQLTokenKind::Eof) {
            let description = self.parse_description();

            let token = self.peek().clone();
            let GraphQLTokenKind::Name(keyword) = &token.kind else {
                self.unexpected_token(&token);
                break;
            };

            match keyword.as_ref() {
                "scalar" | "type" | "interface" | "union" | "enum" | "input" => {
                    doc.definitions.push(self.parse_type_system_definition(description));
                },
                "schema" => doc.schema.push(self.parse_schema_definition(description)),
                "directive" => {
                    doc.directives.push(self.parse_directive_definition(description));
                },
                "extend" => {
                    if description.is_some() {
                        let description_token = self.prev.clone();
                        self.unexpected_token(&description_token);
                    }
                    self.parse_type_system_extension(&mut doc);
                },
                _ => self.unexpected_token(&token),
            }
        }

        match self.error {
            Some(err) => Err(err),
            None => Ok(doc),
        }
    }

    fn parse_type_system_definition(&mut self, description: Option<String>) -> Definition {
        let location = self.current_location();
        let kind = match &self.peek().kind {
            GraphQLTokenKind::Name(keyword) => DefinitionKind::from_keyword(keyword),
            _ => None,
        };
        let Some(kind) = kind else {
            self.unexpected_error();
            return Definition::default();
        };
        self.next();

        let mut def = Definition {
            kind,
            name: self.parse_name(),
            description,
            location,
            ..Default::default()
        };
        self.parse_definition_body(&mut def);
        def
    }

    /// Parses the kind-specific clauses following a definition's name.
    fn parse_definition_body(&mut self, def: &mut Definition) {
        match def.kind {
            DefinitionKind::Scalar => {
                def.directives = self.parse_directives(true);
            },
            DefinitionKind::Object => {
                def.interfaces = self.parse_implements_interfaces();
                def.directives = self.parse_directives(true);
                def.fields = self.parse_fields_definition();
            },
            DefinitionKind::Interface => {
                def.directives = self.parse_directives(true);
                def.fields = self.parse_fields_definition();
            },
            DefinitionKind::Union => {
                def.directives = self.parse_directives(true);
                def.types = self.parse_union_member_types();
            },
            DefinitionKind::Enum => {
                def.directives = self.parse_directives(true);
                def.values = self.parse_enum_values_definition();
            },
            DefinitionKind::InputObject => {
                def.directives = self.parse_directives(true);
                def.fields = self.parse_input_fields_definition();
            },
        }
    }

    fn parse_implements_interfaces(&mut self) -> Vec<String> {
        let mut interfaces = Vec::new();
        if self.peek_is_keyword("implements") {
            self.next();
            self.skip(GraphQLTokenKind::Ampersand);
            interfaces.push(self.parse_name());
            while self.skip(GraphQLTokenKind::Ampersand) {
                interfaces.push(self.parse_name());
            }
        }
        interfaces
    }

    fn parse_fields_definition(&mut self) -> Vec<FieldDefinition> {
        let mut fields = Vec::new();
        self.many(GraphQLTokenKind::CurlyBraceOpen, GraphQLTokenKind::CurlyBraceClose, |p| {
            fields.push(p.parse_field_definition());
        });
        fields
    }

    fn parse_field_definition(&mut self) -> FieldDefinition {
        let description = self.parse_description();
        let location = self.current_location();
        let name = self.parse_name();
        let arguments = self.parse_argument_defs();
        self.expect(GraphQLTokenKind::Colon);
        FieldDefinition {
            description,
            name,
            arguments,
            ty: self.parse_type_reference(),
            default_value: None,
            directives: self.parse_directives(true),
            location,
        }
    }

    fn parse_argument_defs(&mut self) -> Vec<FieldDefinition> {
        let mut arguments = Vec::new();
        self.many(GraphQLTokenKind::ParenOpen, GraphQLTokenKind::ParenClose, |p| {
            arguments.push(p.parse_input_value_def());
        });
        arguments
    }

    fn parse_input_value_def(&mut self) -> FieldDefinition {
        let description = self.parse_description();
        let location = self.current_location();
        let name = self.parse_name();
        self.expect(GraphQLTokenKind::Colon);
        let ty = self.parse_type_reference();
        let default_value = if self.skip(GraphQLTokenKind::Equals) {
            Some(self.parse_value_literal(true))
        } else {
            None
        };
        FieldDefinition {
            description,
            name,
            arguments: Vec::new(),
            ty,
            default_value,
            directives: self.parse_directives(true),
            location,
        }
    }

    fn parse_input_fields_definition(&mut self) -> Vec<FieldDefinition> {
        let mut fields = Vec::new();
        self.many(GraphQLTokenKind::CurlyBraceOpen, GraphQLTokenKind::CurlyBraceClose, |p| {
            fields.push(p.parse_input_value_def());
        });
        fields
    }

    fn parse_union_member_types(&mut self) -> Vec<String> {
        let mut types = Vec::new();
        if self.skip(GraphQLTokenKind::Equals) {
            self.skip(GraphQLTokenKind::Pipe);
            types.push(self.parse_name());
            while self.skip(GraphQLTokenKind::Pipe) {
                types.push(self.parse_name());
            }
        }
        types
    }

    fn parse_enum_values_definition(&mut self) -> Vec<EnumValueDefinition> {
        let mut values = Vec::new();
        self.many(GraphQLTokenKind::CurlyBraceOpen, GraphQLTokenKind::CurlyBraceClose, |p| {
            values.push(EnumValueDefinition {
                description: p.parse_description(),
                name: p.parse_name(),
                directives: p.parse_directives(true),
            });
        });
        values
    }

    fn parse_schema_definition(&mut self, description: Option<String>) -> SchemaDefinition {
        let location = self.current_location();
        self.expect_keyword("schema");
        SchemaDefinition {
            description,
            directives: self.parse_directives(true),
            operation_types: self.parse_operation_type_definitions(),
            location,
        }
    }

    fn parse_operation_type_definitions(&mut self) -> Vec<OperationTypeDefinition> {
        let mut operation_types = Vec::new();
        self.many(GraphQLTokenKind::CurlyBraceOpen, GraphQLTokenKind::CurlyBraceClose, |p| {
            let operation = p.parse_operation_type();
            p.expect(GraphQLTokenKind::Colon);
            operation_types.push(OperationTypeDefinition {
                operation,
                type_name: p.parse_name(),
            });
        });
        operation_types
    }

    fn parse_type_system_extension(&mut self, doc: &mut SchemaDocument) {
        let location = self.current_location();
        self.expect_keyword("extend");

        let token = self.peek().clone();
        let keyword = match &token.kind {
            GraphQLTokenKind::Name(keyword) => keyword.as_ref(),
            _ => "",
        };

        if keyword == "schema" {
            doc.schema_extensions.push(self.parse_schema_extension(location));
            return;
        }

        let Some(kind) = DefinitionKind::from_keyword(keyword) else {
            self.unexpected_token(&token);
            return;
        };
        self.next();

        let mut def = Definition {
            kind,
            name: self.parse_name(),
            location,
            ..Default::default()
        };
        self.parse_definition_body(&mut def);

        // An extension must add at least one clause to be a real change.
        let adds_nothing = def.directives.is_empty()
            && def.interfaces.is_empty()
            && def.fields.is_empty()
            && def.types.is_empty()
            && def.values.is_empty();
        if adds_nothing {
            self.unexpected_error();
        }

        doc.extensions.push(def);
    }

    fn parse_schema_extension(&mut self, location: Location) -> SchemaDefinition {
        self.expect_keyword("schema");
        let def = SchemaDefinition {
            description: None,
            directives: self.parse_directives(true),
            operation_types: self.parse_operation_type_definitions(),
            location,
        };
        if def.directives.is_empty() && def.operation_types.is_empty() {
            self.unexpected_error();
        }
        def
    }

    fn parse_directive_definition(&mut self, description: Option<String>) -> DirectiveDefinition {
        let location = self.current_location();
        self.expect_keyword("directive");
        self.expect(GraphQLTokenKind::At);

        let name = self.parse_name();
        let arguments = self.parse_argument_defs();
        self.expect_keyword("on");

        DirectiveDefinition {
            description,
            name,
            arguments,
            locations: self.parse_directive_locations(),
            location,
        }
    }

    /// `|`-separated location names, with an optional leading `|`.
    fn parse_directive_locations(&mut self) -> Vec<DirectiveLocation> {
        self.skip(GraphQLTokenKind::Pipe);

        let mut locations = Vec::new();
        locations.extend(self.parse_directive_location());
        while self.skip(GraphQLTokenKind::Pipe) {
            locations.extend(self.parse_directive_location());
        }
        locations
    }

    fn parse_directive_location(&mut self) -> Option<DirectiveLocation> {
        let token = self.expect(NAME);
        if self.error.is_some() {
            return None;
        }

        let location = match &token.kind {
            GraphQLTokenKind::Name(name) => DirectiveLocation::from_name(name),
            _ => None,
        };
        if location.is_none() {
            self.unexpected_token(&token);
        }
        location
    }

    // =========================================================================
    // Query documents
    // =========================================================================

    /// Parses a query (executable) document, consuming the parser.
    pub fn parse_query_document(mut self) -> Result<QueryDocument, GraphQLSyntaxError> {
        let mut doc = QueryDocument::default();

        while self.error.is_none() && !self.peek_is(&GraphQLTokenKind::Eof) {
            let token = self.peek().clone();
            match &token.kind {
                GraphQLTokenKind::CurlyBraceOpen => {
                    doc.operations.push(self.parse_operation_definition());
                },
                GraphQLTokenKind::Name(keyword) => match keyword.as_ref() {
                    "query" | "mutation" | "subscription" => {
                        doc.operations.push(self.parse_operation_definition());
                    },
                    "fragment" => doc.fragments.push(self.parse_fragment_definition()),
                    _ => self.unexpected_token(&token),
                },
                _ => self.unexpected_token(&token),
            }
        }

        match self.error {
            Some(err) => Err(err),
            None => Ok(doc),
        }
    }

    fn parse_operation_definition(&mut self) -> OperationDefinition {
        let location = self.current_location();

        if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            return OperationDefinition {
                operation: OperationType::Query,
                selection_set: self.parse_required_selection_set(),
                location,
                ..Default::default()
            };
        }

        let operation = self.parse_operation_type();
        let name = if matches!(self.peek().kind, GraphQLTokenKind::Name(_)) {
            Some(self.parse_name())
        } else {
            None
        };

        OperationDefinition {
            operation,
            name,
            variable_definitions: self.parse_variable_definitions(),
            directives: self.parse_directives(false),
            selection_set: self.parse_required_selection_set(),
            location,
        }
    }

    fn parse_operation_type(&mut self) -> OperationType {
        let token = self.expect(NAME);
        let operation = match &token.kind {
            GraphQLTokenKind::Name(keyword) => OperationType::from_keyword(keyword),
            _ => None,
        };
        match operation {
            Some(operation) => operation,
            None => {
                self.unexpected_token(&token);
                OperationType::default()
            },
        }
    }

    fn parse_variable_definitions(&mut self) -> Vec<VariableDefinition> {
        let mut defs = Vec::new();
        self.many(GraphQLTokenKind::ParenOpen, GraphQLTokenKind::ParenClose, |p| {
            let location = p.current_location();
            let variable = p.parse_variable();
            p.expect(GraphQLTokenKind::Colon);
            let ty = p.parse_type_reference();
            let default_value = if p.skip(GraphQLTokenKind::Equals) {
                Some(p.parse_value_literal(true))
            } else {
                None
            };
            defs.push(VariableDefinition {
                variable,
                ty,
                default_value,
                directives: p.parse_directives(true),
                location,
            });
        });
        defs
    }

    /// Operations, fragments, and inline fragments must have a selection set.
    fn parse_required_selection_set(&mut self) -> Vec<Selection> {
        if !self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            self.expect(GraphQLTokenKind::CurlyBraceOpen);
            return Vec::new();
        }
        self.parse_selection_set()
    }

    fn parse_selection_set(&mut self) -> Vec<Selection> {
        if !self.enter_nested() {
            return Vec::new();
        }
        let mut selections = Vec::new();
        self.many(GraphQLTokenKind::CurlyBraceOpen, GraphQLTokenKind::CurlyBraceClose, |p| {
            selections.push(p.parse_selection());
        });
        self.exit_nested();
        selections
    }

    fn parse_selection(&mut self) -> Selection {
        if self.peek_is(&GraphQLTokenKind::Ellipsis) {
            self.parse_fragment()
        } else {
            Selection::Field(self.parse_field())
        }
    }

    fn parse_field(&mut self) -> Field {
        let location = self.current_location();
        let name_or_alias = self.parse_name();
        let (alias, name) = if self.skip(GraphQLTokenKind::Colon) {
            (Some(name_or_alias), self.parse_name())
        } else {
            (None, name_or_alias)
        };

        let arguments = self.parse_arguments(false);
        let directives = self.parse_directives(false);
        let selection_set = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            self.parse_selection_set()
        } else {
            Vec::new()
        };

        Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            location,
        }
    }

    /// Parses `...Name` (a spread) or `... [on Type] [@dirs] { ... }` (an
    /// inline fragment).
    fn parse_fragment(&mut self) -> Selection {
        let location = self.current_location();
        self.expect(GraphQLTokenKind::Ellipsis);

        let is_spread = matches!(
            &self.peek().kind,
            GraphQLTokenKind::Name(name) if name != "on",
        );
        if is_spread {
            return Selection::FragmentSpread(FragmentSpread {
                name: self.parse_fragment_name(),
                directives: self.parse_directives(false),
                location,
            });
        }

        let type_condition = if self.peek_is_keyword("on") {
            self.next();
            Some(self.parse_name())
        } else {
            None
        };

        Selection::InlineFragment(InlineFragment {
            type_condition,
            directives: self.parse_directives(false),
            selection_set: self.parse_required_selection_set(),
            location,
        })
    }

    fn parse_fragment_definition(&mut self) -> FragmentDefinition {
        let location = self.current_location();
        self.expect_keyword("fragment");

        let name = self.parse_fragment_name();
        self.expect_keyword("on");

        FragmentDefinition {
            name,
            type_condition: self.parse_name(),
            directives: self.parse_directives(false),
            selection_set: self.parse_required_selection_set(),
            location,
        }
    }

    /// A fragment name is any name except `on`.
    fn parse_fragment_name(&mut self) -> String {
        if self.peek_is_keyword("on") {
            self.unexpected_error();
            return String::new();
        }
        self.parse_name()
    }
}
