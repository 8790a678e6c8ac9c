//! OpenAPI to TypeScript type declarations.
//!
//! This module reads OpenAPI 3.0/3.1 documents and generates:
//! - One `export interface` / `export type` per component schema
//! - A `paths` declaration describing every operation's parameters,
//!   request body and responses

mod emitter;
mod error;
mod ir;
mod options;
mod resolve;
pub mod spec;

pub use emitter::{HEADER, generate};
pub use error::GenerateError;
pub use options::GenerateOptions;
pub use resolve::{Component, ComponentSection, Resolver};
pub use spec::OpenApiDocument;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn parse(json: &str) -> OpenApiDocument {
        serde_json::from_str(json).unwrap()
    }

    fn generate_with(json: &str, options: &GenerateOptions) -> String {
        generate(&parse(json), options).unwrap()
    }

    fn generate_default(json: &str) -> String {
        generate_with(json, &GenerateOptions::default())
    }

    const PETSTORE_JSON: &str = r##"{
  "openapi": "3.1.0",
  "info": { "title": "Petstore", "version": "1.0.0" },
  "servers": [{ "url": "https://petstore.example.com/v1" }],
  "tags": [{ "name": "pets" }],
  "paths": {
    "/pets": {
      "get": {
        "operationId": "listPets",
        "summary": "List all pets",
        "tags": ["pets"],
        "parameters": [
          { "name": "limit", "in": "query", "required": false, "schema": { "type": "integer", "maximum": 100 } },
          { "name": "status", "in": "query", "schema": { "$ref": "#/components/schemas/PetStatus" } }
        ],
        "responses": {
          "200": { "description": "A page of pets", "content": { "application/json": { "schema": { "$ref": "#/components/schemas/PetPage" } } } },
          "default": { "$ref": "#/components/responses/Error" }
        }
      },
      "post": {
        "operationId": "createPet",
        "requestBody": { "required": true, "content": { "application/json": { "schema": { "$ref": "#/components/schemas/NewPet" } } } },
        "responses": {
          "201": { "description": "Created", "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } } } }
        }
      }
    },
    "/pets/{petId}": {
      "parameters": [{ "name": "petId", "in": "path", "required": true, "schema": { "type": "string", "format": "uuid" } }],
      "get": {
        "operationId": "showPetById",
        "responses": {
          "200": { "description": "The pet", "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } } } },
          "404": { "description": "Not found" }
        }
      },
      "delete": {
        "operationId": "deletePet",
        "deprecated": true,
        "responses": { "204": { "description": "Deleted" } }
      }
    }
  },
  "components": {
    "schemas": {
      "Pet": {
        "description": "A pet in the store",
        "allOf": [
          { "$ref": "#/components/schemas/NewPet" },
          { "type": "object", "required": ["id"], "properties": { "id": { "type": "string", "format": "uuid" } } }
        ]
      },
      "NewPet": {
        "type": "object",
        "required": ["name"],
        "properties": {
          "name": { "type": "string", "description": "Display name", "example": "Rex" },
          "tag": { "type": ["string", "null"] },
          "status": { "$ref": "#/components/schemas/PetStatus" },
          "owner": { "$ref": "#/components/schemas/Owner" }
        }
      },
      "PetStatus": { "type": "string", "enum": ["available", "pending", "sold"] },
      "PetPage": {
        "type": "object",
        "required": ["items"],
        "properties": {
          "items": { "type": "array", "items": { "$ref": "#/components/schemas/Pet" } },
          "next": { "type": "string", "nullable": true }
        }
      },
      "Owner": {
        "type": "object",
        "properties": {
          "name": { "type": "string" },
          "pets": { "type": "array", "items": { "$ref": "#/components/schemas/Pet" } }
        }
      },
      "Error": {
        "type": "object",
        "required": ["code", "message"],
        "properties": {
          "code": { "type": "integer" },
          "message": { "type": "string" }
        },
        "additionalProperties": true
      }
    },
    "responses": {
      "Error": { "description": "Unexpected error", "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Error" } } } }
    },
    "securitySchemes": {
      "bearer": { "type": "http", "scheme": "bearer", "bearerFormat": "JWT" }
    }
  }
}"##;

    #[test]
    fn test_generate_from_openapi_json() {
        let ts_code = generate_default(PETSTORE_JSON);

        // Header comes first
        assert!(ts_code.starts_with(HEADER), "Should start with the header");

        // paths declaration precedes the schema declarations
        let paths_at = ts_code.find("export interface paths {").unwrap();
        let pet_at = ts_code.find("export type Pet =").unwrap();
        assert!(paths_at < pet_at, "paths should come before schemas");

        // Component schemas
        assert!(
            ts_code.contains("export type Pet = NewPet & {\n  \"id\": string;\n};"),
            "allOf with a reference should be an intersection"
        );
        assert!(
            ts_code.contains("export interface NewPet {\n  \"name\": string;\n  \"tag\"?: string | null;\n  \"status\"?: PetStatus;\n  \"owner\"?: Owner;\n}"),
            "NewPet should be an interface in document order"
        );
        assert!(ts_code.contains(
            "export type PetStatus = \"available\" | \"pending\" | \"sold\";"
        ));
        assert!(ts_code.contains("\"items\": Pet[];"));
        assert!(ts_code.contains("\"next\"?: string | null;"));
        assert!(ts_code.contains(
            "export interface Error {\n  \"code\": number;\n  \"message\": string;\n  [key: string]: unknown;\n}"
        ));

        // Paths
        assert!(ts_code.contains("  \"/pets\": {\n    get: {\n      parameters: {\n        query?: {\n          \"limit\"?: number;\n          \"status\"?: PetStatus;\n        };\n      };"));
        assert!(ts_code.contains("200: PetPage;"));
        assert!(ts_code.contains("\"default\": Error;"));
        assert!(ts_code.contains("requestBody: NewPet;"));
        assert!(ts_code.contains("201: Pet;"));
        assert!(ts_code.contains("path: {\n          \"petId\": string;\n        };"));
        assert!(ts_code.contains("404: void;"));
        assert!(ts_code.contains("204: void;"));

        // No doc comments without the switches
        assert!(!ts_code.contains("@description"));

        // Single trailing newline
        assert!(ts_code.ends_with("}\n"));
        assert!(!ts_code.ends_with("\n\n"));
    }

    #[test]
    fn test_generation_is_idempotent() {
        let doc = parse(PETSTORE_JSON);
        let options = GenerateOptions {
            alphabetize: true,
            include_descriptions: true,
            ..GenerateOptions::default()
        };
        let first = generate(&doc, &options).unwrap();
        let second = generate(&doc, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_basic_schema_types() {
        let ts_code = generate_default(
            r##"{
  "openapi": "3.0.0",
  "info": { "title": "Test API", "version": "1.0.0" },
  "paths": {},
  "components": {
    "schemas": {
      "StringType": { "type": "string" },
      "NumberType": { "type": "number" },
      "IntegerType": { "type": "integer" },
      "BoolType": { "type": "boolean" },
      "ArrayType": { "type": "array", "items": { "type": "string" } },
      "GridType": { "type": "array", "items": { "type": "array", "items": { "type": "number" } } }
    }
  }
}"##,
        );

        assert!(ts_code.contains("export type StringType = string;"));
        assert!(ts_code.contains("export type NumberType = number;"));
        assert!(ts_code.contains("export type IntegerType = number;"));
        assert!(ts_code.contains("export type BoolType = boolean;"));
        assert!(ts_code.contains("export type ArrayType = string[];"));
        assert!(ts_code.contains("export type GridType = number[][];"));
        assert!(
            !ts_code.contains("interface paths"),
            "Empty paths should not produce a paths declaration"
        );
    }

    #[test]
    fn test_object_types() {
        let ts_code = generate_default(
            r##"{
  "openapi": "3.0.0",
  "info": { "title": "Test API", "version": "1.0.0" },
  "paths": {},
  "components": {
    "schemas": {
      "User": {
        "type": "object",
        "required": ["id", "name"],
        "properties": {
          "id": { "type": "number" },
          "name": { "type": "string" },
          "email": { "type": "string" }
        }
      },
      "Profile": {
        "type": "object",
        "properties": {
          "name": { "type": "string" },
          "age": { "type": "integer" }
        }
      }
    }
  }
}"##,
        );

        assert!(ts_code.contains("export interface User {"));
        assert!(ts_code.contains("\"id\": number;"));
        assert!(ts_code.contains("\"name\": string;"));
        assert!(ts_code.contains("\"email\"?: string;"));
        assert!(ts_code.contains("export interface Profile {"));
        assert!(ts_code.contains("\"name\"?: string;"));
        assert!(ts_code.contains("\"age\"?: number;"));
    }

    #[test]
    fn test_enum_and_nullable() {
        let ts_code = generate_default(
            r##"{
  "openapi": "3.0.0",
  "info": { "title": "Test API", "version": "1.0.0" },
  "paths": {},
  "components": {
    "schemas": {
      "Status": { "type": "string", "enum": ["active", "inactive"] },
      "Priority": { "type": "integer", "enum": [1, 2, 3] },
      "NullableString": { "type": "string", "nullable": true },
      "Mixed": { "enum": ["auto", 0, false, null] }
    }
  }
}"##,
        );

        assert!(ts_code.contains("export type Status = \"active\" | \"inactive\";"));
        assert!(ts_code.contains("export type Priority = 1 | 2 | 3;"));
        assert!(ts_code.contains("export type NullableString = string | null;"));
        assert!(ts_code.contains("export type Mixed = \"auto\" | 0 | false | null;"));
    }

    #[test]
    fn test_composition_types() {
        let ts_code = generate_default(
            r##"{
  "openapi": "3.0.0",
  "info": { "title": "Test API", "version": "1.0.0" },
  "paths": {},
  "components": {
    "schemas": {
      "Base": { "type": "object", "properties": { "id": { "type": "number" } } },
      "Extended": {
        "allOf": [
          { "$ref": "#/components/schemas/Base" },
          { "type": "object", "properties": { "name": { "type": "string" } } }
        ]
      },
      "StringOrNumber": { "oneOf": [{ "type": "string" }, { "type": "number" }] },
      "Either": { "anyOf": [{ "type": "string" }, { "type": "boolean" }] },
      "Merged": {
        "allOf": [
          { "type": "object", "properties": { "a": { "type": "string" } }, "required": ["a"] },
          { "type": "object", "properties": { "b": { "type": "number" } } }
        ]
      },
      "NotString": { "not": { "type": "string" } }
    }
  }
}"##,
        );

        assert!(ts_code.contains("export type Extended = Base & {\n  \"name\"?: string;\n};"));
        assert!(ts_code.contains("export type StringOrNumber = string | number;"));
        assert!(ts_code.contains("export type Either = string | boolean;"));
        assert!(ts_code.contains(
            "export type Merged = {\n  \"a\": string;\n  \"b\"?: number;\n};"
        ));
        assert!(ts_code.contains(
            "export type NotString = unknown /* not: negation is not representable */;"
        ));
    }

    #[test]
    fn test_references_use_declaration_names() {
        let ts_code = generate_default(
            r##"{
  "openapi": "3.0.0",
  "info": { "title": "Test API", "version": "1.0.0" },
  "paths": {},
  "components": {
    "schemas": {
      "User": { "type": "object", "properties": { "id": { "type": "number" } } },
      "UserList": { "type": "array", "items": { "$ref": "#/components/schemas/User" } },
      "Wrapper": { "type": "object", "properties": { "user": { "$ref": "#/components/schemas/User" } } }
    }
  }
}"##,
        );

        assert!(ts_code.contains("export interface User {"));
        assert!(ts_code.contains("export type UserList = User[];"));
        assert!(ts_code.contains("export interface Wrapper {\n  \"user\"?: User;\n}"));
    }

    #[test]
    fn test_recursive_schemas_terminate() {
        let ts_code = generate_default(
            r##"{
  "openapi": "3.1.0",
  "components": {
    "schemas": {
      "TreeNode": {
        "type": "object",
        "properties": {
          "value": { "type": "string" },
          "children": { "type": "array", "items": { "$ref": "#/components/schemas/TreeNode" } }
        }
      },
      "A": { "type": "object", "properties": { "b": { "$ref": "#/components/schemas/B" } } },
      "B": { "type": "object", "properties": { "a": { "$ref": "#/components/schemas/A" } } }
    }
  }
}"##,
        );

        assert!(ts_code.contains("\"children\"?: TreeNode[];"));
        assert!(ts_code.contains("export interface A {\n  \"b\"?: B;\n}"));
        assert!(ts_code.contains("export interface B {\n  \"a\"?: A;\n}"));
    }

    #[test]
    fn test_paths_parameters_and_bodies() {
        let ts_code = generate_default(
            r##"{
  "openapi": "3.0.0",
  "info": { "title": "Test API", "version": "1.0.0" },
  "paths": {
    "/users/{id}": {
      "get": {
        "parameters": [{ "name": "id", "in": "path", "required": true, "schema": { "type": "string" } }],
        "responses": { "200": { "description": "OK" } }
      }
    },
    "/search": {
      "get": {
        "parameters": [
          { "name": "q", "in": "query", "schema": { "type": "string" } },
          { "name": "limit", "in": "query", "schema": { "type": "integer" } }
        ],
        "responses": { "200": { "description": "OK" } }
      }
    },
    "/users": {
      "post": {
        "requestBody": {
          "required": true,
          "content": {
            "application/json": {
              "schema": { "type": "object", "properties": { "name": { "type": "string" }, "email": { "type": "string" } } }
            }
          }
        },
        "responses": { "201": { "description": "Created" } }
      }
    }
  }
}"##,
        );

        assert!(ts_code.contains("export interface paths {"));
        assert!(ts_code.contains("\"/users/{id}\": {"));
        assert!(ts_code.contains("parameters: {"));
        assert!(ts_code.contains("path: {"));
        assert!(ts_code.contains("\"id\": string;"));
        assert!(ts_code.contains("\"/search\": {"));
        assert!(ts_code.contains("query?: {"));
        assert!(ts_code.contains("\"q\"?: string;"));
        assert!(ts_code.contains("\"limit\"?: number;"));
        assert!(ts_code.contains("post: {"));
        assert!(ts_code.contains("requestBody: {"));
        assert!(ts_code.contains("\"name\"?: string;"));
        assert!(ts_code.contains("\"email\"?: string;"));
        assert!(ts_code.contains("201: void;"));
    }

    #[test]
    fn test_alphabetize() {
        let json = r##"{
  "openapi": "3.0.0",
  "paths": {},
  "components": {
    "schemas": {
      "Zebra": { "type": "string" },
      "Apple": { "type": "string" },
      "Banana": { "type": "string" }
    }
  }
}"##;
        let options = GenerateOptions {
            alphabetize: true,
            ..GenerateOptions::default()
        };
        let ts_code = generate_with(json, &options);
        let apple = ts_code.find("export type Apple").unwrap();
        let banana = ts_code.find("export type Banana").unwrap();
        let zebra = ts_code.find("export type Zebra").unwrap();
        assert!(apple < banana && banana < zebra);

        // Document order without the option
        let ts_code = generate_default(json);
        assert!(ts_code.find("export type Zebra").unwrap() < ts_code.find("export type Apple").unwrap());
    }

    #[test]
    fn test_header_toggle() {
        let json = r##"{ "components": { "schemas": { "Id": { "type": "string" } } } }"##;

        let ts_code = generate_default(json);
        assert!(ts_code.contains("This file was auto-generated by ts-open-api"));
        assert!(ts_code.contains("DO NOT MAKE DIRECT CHANGES TO THE FILE"));
        assert_eq!(
            ts_code,
            format!("{HEADER}\n\nexport type Id = string;\n")
        );

        let options = GenerateOptions {
            header: false,
            ..GenerateOptions::default()
        };
        assert_eq!(generate_with(json, &options), "export type Id = string;\n");
    }

    #[test]
    fn test_empty_document() {
        let options = GenerateOptions {
            header: false,
            ..GenerateOptions::default()
        };
        assert_eq!(generate_with("{}", &options), "");
        assert_eq!(generate_default("{}"), format!("{HEADER}\n"));
    }

    #[test]
    fn test_immutable_and_export_type() {
        let json = r##"{
  "components": {
    "schemas": {
      "Tags": {
        "type": "object",
        "required": ["values"],
        "properties": { "values": { "type": "array", "items": { "type": "string" } } },
        "additionalProperties": { "type": "string" }
      }
    }
  }
}"##;
        let options = GenerateOptions {
            immutable: true,
            export_type: true,
            header: false,
            ..GenerateOptions::default()
        };
        assert_eq!(
            generate_with(json, &options),
            "export type Tags = {\n  readonly \"values\": readonly string[];\n  readonly [key: string]: string;\n};\n"
        );
    }

    #[test]
    fn test_default_non_nullable() {
        let json = r##"{
  "components": {
    "schemas": {
      "Settings": {
        "type": "object",
        "properties": {
          "theme": { "type": "string", "default": "dark" },
          "locale": { "type": "string", "default": null },
          "tz": { "type": "string" }
        }
      }
    }
  }
}"##;
        let ts_code = generate_default(json);
        assert!(ts_code.contains("\"theme\"?: string;"));
        assert!(ts_code.contains("\"locale\"?: string | null;"));

        let options = GenerateOptions {
            default_non_nullable: true,
            ..GenerateOptions::default()
        };
        let ts_code = generate_with(json, &options);
        assert!(
            ts_code.contains("\"theme\"?: string;"),
            "a default does not make a property required: {ts_code}"
        );
        assert!(ts_code.contains("\"locale\"?: string;"));
        assert!(ts_code.contains("\"tz\"?: string;"));
    }

    #[test]
    fn test_descriptions_and_examples() {
        let options = GenerateOptions {
            include_descriptions: true,
            include_examples: true,
            ..GenerateOptions::default()
        };
        let ts_code = generate_with(PETSTORE_JSON, &options);

        assert!(ts_code.contains("/** @description A pet in the store */\nexport type Pet ="));
        assert!(ts_code.contains(
            "  /**\n   * @description Display name\n   * @example \"Rex\"\n   */\n  \"name\": string;"
        ));
        assert!(ts_code.contains("     * List all pets\n     * @operationId listPets\n"));
        assert!(ts_code.contains("     * @operationId deletePet\n     * @deprecated\n"));
        assert!(ts_code.contains("/** @description Not found */\n        404: void;"));
    }

    #[test]
    fn test_doc_text_cannot_close_comment() {
        let json = r##"{
  "components": {
    "schemas": { "Tricky": { "type": "string", "description": "ends */ here" } }
  }
}"##;
        let options = GenerateOptions {
            include_descriptions: true,
            header: false,
            ..GenerateOptions::default()
        };
        assert_eq!(
            generate_with(json, &options),
            "/** @description ends *\\/ here */\nexport type Tricky = string;\n"
        );
    }

    #[test]
    fn test_names_are_sanitized_and_unique() {
        let json = r##"{
  "paths": { "/x": { "get": { "responses": {} } } },
  "components": {
    "schemas": {
      "user-profile": { "type": "string" },
      "userProfile": { "type": "number" },
      "paths": { "type": "boolean" },
      "Holder": {
        "type": "object",
        "properties": {
          "a": { "$ref": "#/components/schemas/user-profile" },
          "b": { "$ref": "#/components/schemas/userProfile" },
          "c": { "$ref": "#/components/schemas/paths" }
        }
      }
    }
  }
}"##;
        let ts_code = generate_default(json);
        assert!(ts_code.contains("export type userProfile = string;"));
        assert!(ts_code.contains("export type userProfile_2 = number;"));
        assert!(ts_code.contains("export type paths_2 = boolean;"));
        assert!(ts_code.contains("\"a\"?: userProfile;\n  \"b\"?: userProfile_2;\n  \"c\"?: paths_2;"));
    }

    #[test]
    fn test_unresolved_reference_fails() {
        let json = r##"{
  "components": {
    "schemas": {
      "User": { "type": "object", "properties": { "org": { "$ref": "#/components/schemas/Org" } } }
    }
  }
}"##;
        let err = generate(&parse(json), &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, GenerateError::UnresolvedReference { .. }));
        assert_eq!(err.pointer(), "#/components/schemas/Org");
        assert_eq!(err.location(), "components.schemas.User.properties.org");
        assert_eq!(
            err.to_string(),
            "unresolved reference '#/components/schemas/Org' at components.schemas.User.properties.org"
        );
    }

    #[test]
    fn test_unsupported_reference_fails() {
        let json = r##"{
  "components": {
    "schemas": {
      "User": { "type": "object", "properties": { "id": { "type": "string" } } },
      "UserId": { "$ref": "#/components/schemas/User/properties/id" },
      "Remote": { "$ref": "common.yaml#/components/schemas/Thing" }
    }
  }
}"##;
        let err = generate(&parse(json), &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, GenerateError::UnsupportedReference { .. }));
        assert_eq!(err.location(), "components.schemas.UserId");
    }

    #[test]
    fn test_yaml_style_type_arrays_and_tuples() {
        let json = r##"{
  "components": {
    "schemas": {
      "Point": { "type": "array", "items": { "type": "number" }, "minItems": 2, "maxItems": 2 },
      "MaybeCount": { "type": ["integer", "null"] }
    }
  }
}"##;
        let options = GenerateOptions {
            support_array_length: true,
            header: false,
            ..GenerateOptions::default()
        };
        assert_eq!(
            generate_with(json, &options),
            "export type Point = [number, number];\n\nexport type MaybeCount = number | null;\n"
        );
    }

    #[test]
    fn test_additional_properties_option() {
        let json = r##"{
  "components": {
    "schemas": {
      "Open": { "type": "object", "properties": { "a": { "type": "string" } } },
      "Closed": { "type": "object", "properties": { "a": { "type": "string" } }, "additionalProperties": false }
    }
  }
}"##;
        let options = GenerateOptions {
            additional_properties: true,
            ..GenerateOptions::default()
        };
        let ts_code = generate_with(json, &options);
        assert!(ts_code.contains(
            "export interface Open {\n  \"a\"?: string;\n  [key: string]: unknown;\n}"
        ));
        assert!(ts_code.contains("export interface Closed {\n  \"a\"?: string;\n}"));
    }

    #[test]
    fn test_path_params_as_types() {
        let options = GenerateOptions {
            path_params_as_types: true,
            ..GenerateOptions::default()
        };
        let ts_code = generate_with(PETSTORE_JSON, &options);
        assert!(ts_code.contains(
            "\"petId\": `${string}-${string}-${string}-${string}-${string}`;"
        ));
        // query parameters are never rewritten
        assert!(ts_code.contains("\"limit\"?: number;"));
    }
}
