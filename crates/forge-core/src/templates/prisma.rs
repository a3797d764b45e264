//! Prisma schema and datasource configuration
//!
//! Both files are static: the datasource is always SQLite and the generated
//! client always lands in `src/generated/prisma`, whatever the language mode.

/// Directory the Prisma client is generated into, relative to the project root
pub const GENERATED_CLIENT_DIR: &str = "src/generated/prisma";

const SCHEMA: &str = r#"// Prisma schema: https://pris.ly/d/prisma-schema

generator client {
  provider = "prisma-client-js"
  output   = "../src/generated/prisma"
}

datasource db {
  provider = "sqlite"
}
"#;

const CONFIG: &str = r#"import "dotenv/config";
import { defineConfig, env } from "prisma/config";

export default defineConfig({
  schema: "prisma/schema.prisma",
  migrations: {
    path: "prisma/migrations",
  },
  datasource: {
    url: env("DATABASE_URL"),
  },
});
"#;

/// `prisma/schema.prisma`
pub fn render_schema() -> String {
    SCHEMA.to_string()
}

/// `prisma.config.ts`, written in both language modes
pub fn render_config() -> String {
    CONFIG.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_output_matches_generated_dir() {
        let schema = render_schema();
        // schema lives in prisma/, so the output path climbs one level
        assert!(schema.contains(&format!(r#"output   = "../{}""#, GENERATED_CLIENT_DIR)));
        assert!(schema.contains(r#"provider = "sqlite""#));
    }

    #[test]
    fn test_config_wires_schema_and_env() {
        let config = render_config();
        assert!(config.contains(r#"schema: "prisma/schema.prisma""#));
        assert!(config.contains(r#"path: "prisma/migrations""#));
        assert!(config.contains(r#"env("DATABASE_URL")"#));
    }
}
