//! Application source files: entry point, error middleware, Prisma client

use super::variant::LanguageMode;

const ENTRY_TS: &str = r#"import express, { type Request, type Response } from "express";
import { errorHandler } from "./middlewares/error.middleware";

const app = express();
const PORT = Number(process.env.PORT) || 3000;

app.use(express.json());
app.use(express.urlencoded({ extended: true }));
app.use(express.static("public"));

app.get("/", (_req: Request, res: Response) => {
  res.json({ message: "Welcome to the API" });
});

app.use(errorHandler);

app.listen(PORT, () => {
  console.log(`Server running on http://localhost:${PORT}`);
});
"#;

const ENTRY_JS: &str = r#"import express from "express";
import { errorHandler } from "./middlewares/error.middleware.js";

const app = express();
const PORT = Number(process.env.PORT) || 3000;

app.use(express.json());
app.use(express.urlencoded({ extended: true }));
app.use(express.static("public"));

app.get("/", (_req, res) => {
  res.json({ message: "Welcome to the API" });
});

app.use(errorHandler);

app.listen(PORT, () => {
  console.log(`Server running on http://localhost:${PORT}`);
});
"#;

const ERROR_MIDDLEWARE_TS: &str = r#"import type { NextFunction, Request, Response } from "express";

interface PrismaKnownError extends Error {
  code?: string;
  meta?: {
    target?: string | string[];
    cause?: string;
  };
}

export const errorHandler = (
  err: PrismaKnownError,
  _req: Request,
  res: Response,
  _next: NextFunction,
) => {
  let statusCode = res.statusCode === 200 ? 500 : res.statusCode;
  let message = err.message;

  if (err.code === "P2002") {
    statusCode = 409;
    message = `Duplicate field value: ${err.meta?.target}`;
  }

  if (err.code === "P2025") {
    statusCode = 404;
    message = `Resource not found: ${err.meta?.cause}`;
  }

  res.status(statusCode).json({
    message,
    stack: process.env.NODE_ENV === "production" ? null : err.stack,
  });
};
"#;

const ERROR_MIDDLEWARE_JS: &str = r#"export const errorHandler = (err, _req, res, _next) => {
  let statusCode = res.statusCode === 200 ? 500 : res.statusCode;
  let message = err.message;

  if (err.code === "P2002") {
    statusCode = 409;
    message = `Duplicate field value: ${err.meta?.target}`;
  }

  if (err.code === "P2025") {
    statusCode = 404;
    message = `Resource not found: ${err.meta?.cause}`;
  }

  res.status(statusCode).json({
    message,
    stack: process.env.NODE_ENV === "production" ? null : err.stack,
  });
};
"#;

const PRISMA_CLIENT_TS: &str = r#"import { PrismaBetterSqlite3 } from "@prisma/adapter-better-sqlite3";
import { PrismaClient } from "../generated/prisma/client";

const adapter = new PrismaBetterSqlite3({ url: process.env.DATABASE_URL! });

export const prisma = new PrismaClient({ adapter });

export default prisma;
"#;

const PRISMA_CLIENT_JS: &str = r#"import { PrismaBetterSqlite3 } from "@prisma/adapter-better-sqlite3";
import { PrismaClient } from "../generated/prisma/index.js";

const adapter = new PrismaBetterSqlite3({ url: process.env.DATABASE_URL });

export const prisma = new PrismaClient({ adapter });

export default prisma;
"#;

/// Express entry point (`src/index.*`)
pub fn render_entry(language: LanguageMode) -> String {
    match language {
        LanguageMode::TypeScript => ENTRY_TS,
        LanguageMode::JavaScript => ENTRY_JS,
    }
    .to_string()
}

/// Error-handling middleware (`src/middlewares/error.middleware.*`)
pub fn render_error_middleware(language: LanguageMode) -> String {
    match language {
        LanguageMode::TypeScript => ERROR_MIDDLEWARE_TS,
        LanguageMode::JavaScript => ERROR_MIDDLEWARE_JS,
    }
    .to_string()
}

/// Prisma client wrapper (`src/lib/prisma.*`)
pub fn render_prisma_client(language: LanguageMode) -> String {
    match language {
        LanguageMode::TypeScript => PRISMA_CLIENT_TS,
        LanguageMode::JavaScript => PRISMA_CLIENT_JS,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_middleware_import() {
        let ts = render_entry(LanguageMode::TypeScript);
        let js = render_entry(LanguageMode::JavaScript);

        assert!(ts.contains(r#"from "./middlewares/error.middleware";"#));
        assert!(js.contains(r#"from "./middlewares/error.middleware.js";"#));
    }

    #[test]
    fn test_entry_behaviour_matches_across_modes() {
        for language in LanguageMode::ALL {
            let entry = render_entry(language);
            assert!(entry.contains("express.json()"));
            assert!(entry.contains("express.urlencoded({ extended: true })"));
            assert!(entry.contains(r#"express.static("public")"#));
            assert!(entry.contains("|| 3000"));
            // error middleware is mounted after every route
            let route = entry.find("app.get(").unwrap();
            let handler = entry.find("app.use(errorHandler)").unwrap();
            assert!(handler > route);
        }
    }

    #[test]
    fn test_javascript_sources_have_no_types() {
        for source in [
            render_entry(LanguageMode::JavaScript),
            render_error_middleware(LanguageMode::JavaScript),
            render_prisma_client(LanguageMode::JavaScript),
        ] {
            assert!(!source.contains("import type"));
            assert!(!source.contains("interface "));
            assert!(!source.contains(": Request"));
            assert!(!source.contains("!;"));
        }
    }

    #[test]
    fn test_error_middleware_remaps_prisma_codes() {
        for language in LanguageMode::ALL {
            let middleware = render_error_middleware(language);
            assert!(middleware.contains(r#"err.code === "P2002""#));
            assert!(middleware.contains("statusCode = 409"));
            assert!(middleware.contains("err.meta?.target"));
            assert!(middleware.contains(r#"err.code === "P2025""#));
            assert!(middleware.contains("statusCode = 404"));
            assert!(middleware.contains("err.meta?.cause"));
            assert!(middleware.contains("res.statusCode === 200 ? 500"));
            assert!(middleware.contains(r#"process.env.NODE_ENV === "production" ? null"#));
        }
    }

    #[test]
    fn test_prisma_client_paths() {
        let ts = render_prisma_client(LanguageMode::TypeScript);
        let js = render_prisma_client(LanguageMode::JavaScript);

        assert!(ts.contains(r#""../generated/prisma/client""#));
        assert!(ts.contains("process.env.DATABASE_URL!"));
        assert!(js.contains(r#""../generated/prisma/index.js""#));
        assert!(js.contains("url: process.env.DATABASE_URL }"));
    }
}
