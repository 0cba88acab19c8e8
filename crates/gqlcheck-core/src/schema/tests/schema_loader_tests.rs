use crate::Schema;
use crate::SchemaLoadError;
use crate::SchemaLoader;
use crate::file_reader::ReadContentError;
use crate::tests::utils::TempDir;
use gqlcheck_parser::Location;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaLoadError>;

mod load_str {
    use super::*;

    #[test]
    fn sources_are_combined_before_assembly() -> Result<()> {
        let schema = SchemaLoader::new()
            .load_str(None, "extend type Query { b: Int }")?
            .load_str(None, "type Query { a: Int }\nschema { query: Query }")?
            .build()?;

        let query = schema.query_type().unwrap();
        assert_eq!(query.fields.len(), 2);

        Ok(())
    }

    #[test]
    fn unnamed_sources_get_numbered_names() {
        let err = SchemaLoader::new()
            .load_str(None, "type A { a: Int }")
            .and_then(|loader| loader.load_str(None, "type { }"))
            .unwrap_err();

        assert_eq!(err.location(), Some(Location::new(1, 6)));
        let SchemaLoadError::ParseError { file, err } = err else {
            panic!("expected a parse error");
        };
        assert_eq!(file, PathBuf::from("str://1"));
        assert_eq!(err.message(), "Expected Name, found {");
    }

    #[test]
    fn named_source_appears_in_parse_error() {
        let err = SchemaLoader::new()
            .load_str(Some(PathBuf::from("schema/users.graphql")), "type A {")
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Error parsing schema/users.graphql: 1:9: Expected Name, found <EOF>",
        );
    }

    /// Semantic errors across sources surface at `build()`.
    #[test]
    fn duplicate_across_sources() {
        let err = SchemaLoader::new()
            .load_str(None, "type A { a: Int }")
            .and_then(|loader| loader.load_str(None, "type A { b: Int }"))
            .and_then(|loader| loader.build())
            .unwrap_err();

        assert!(matches!(err, SchemaLoadError::DuplicateTypeDefinition { .. }));
    }
}

mod load_document {
    use super::*;

    #[test]
    fn parsed_documents_are_assembled() -> Result<()> {
        let doc = gqlcheck_parser::parse_schema("type Query { a: Int }\nschema { query: Query }")
            .unwrap();

        let schema = Schema::from_document(doc.clone())?;
        let via_loader = Schema::loader().load_document(doc).build()?;

        assert_eq!(schema, via_loader);
        assert!(schema.query_type().is_some());

        Ok(())
    }
}

mod load_files {
    use super::*;

    #[test]
    fn multiple_files() -> Result<()> {
        let dir = TempDir::new("multiple-files");
        let types = dir.write("types.graphql", "type Query { a: Int }\n");
        let roots = dir.write("schema.graphql", "schema { query: Query }\n");

        let schema = SchemaLoader::new().load_files([&types, &roots])?.build()?;

        assert_eq!(schema.query_type().map(|def| def.name.as_str()), Some("Query"));

        Ok(())
    }

    #[test]
    fn parse_error_names_the_file() {
        let dir = TempDir::new("parse-error");
        let bad = dir.write("bad.graphql", "type Query {\n  a: Int\n");

        let err = SchemaLoader::new().load_file(&bad).unwrap_err();

        let SchemaLoadError::ParseError { file, err } = err else {
            panic!("expected a parse error");
        };
        assert_eq!(file, bad);
        assert_eq!(err.locations(), &[Location::new(3, 1)]);
    }

    #[test]
    fn missing_file() {
        let dir = TempDir::new("missing-file");
        let missing = dir.path().join("nope.graphql");

        let err = SchemaLoader::new().load_file(&missing).unwrap_err();

        assert_eq!(err, SchemaLoadError::FileRead(ReadContentError::NotAFile(missing)));
        assert_eq!(err.location(), None);
    }

    #[test]
    fn directory_is_not_a_file() {
        let dir = TempDir::new("directory");

        let err = SchemaLoader::new().load_file(dir.path()).unwrap_err();

        assert!(matches!(
            err,
            SchemaLoadError::FileRead(ReadContentError::NotAFile(_)),
        ));
    }

    #[test]
    fn invalid_utf8() {
        let dir = TempDir::new("invalid-utf8");
        let path = dir.path().join("latin1.graphql");
        std::fs::write(&path, b"type Caf\xe9 { a: Int }").unwrap();

        let err = SchemaLoader::new().load_file(&path).unwrap_err();

        let SchemaLoadError::FileRead(read_err) = err else {
            panic!("expected a read error");
        };
        assert!(matches!(read_err, ReadContentError::InvalidUtf8 { .. }));
        assert_eq!(read_err.file_path(), path.as_path());
    }
}
