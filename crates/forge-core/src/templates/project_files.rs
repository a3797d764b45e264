//! Root-level project files: `tsconfig.json`, `.env`, `.gitignore`

use super::prisma::GENERATED_CLIENT_DIR;

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "ESNext",
    "moduleResolution": "bundler",
    "lib": ["ES2022"],
    "types": ["node"],
    "rootDir": "./src",
    "outDir": "./dist",
    "baseUrl": ".",
    "paths": {
      "@/*": ["src/*"]
    },
    "strict": true,
    "esModuleInterop": true,
    "skipLibCheck": true,
    "forceConsistentCasingInFileNames": true,
    "resolveJsonModule": true
  },
  "include": ["src/**/*"],
  "exclude": ["node_modules", "dist"]
}
"#;

const ENV_PORT: u16 = 3000;

/// `tsconfig.json`, only written in TypeScript mode
pub fn render_tsconfig() -> String {
    TSCONFIG.to_string()
}

/// `.env`
///
/// The connection string points at a SQLite file named after `database`,
/// relative to the project root.
pub fn render_env(database: &str) -> String {
    format!(
        "PORT={port}\n\
         NODE_ENV=development\n\
         \n\
         DATABASE_URL=\"file:./{database}.db\"\n",
        port = ENV_PORT,
        database = database,
    )
}

/// `.gitignore`
pub fn render_gitignore() -> String {
    let sections: [(&str, &[&str]); 7] = [
        ("Dependencies", &["node_modules/"]),
        ("Environment", &[".env", ".env.*", "!.env.example"]),
        ("Build output", &["dist/"]),
        (
            "Logs",
            &["logs/", "*.log", "npm-debug.log*", "yarn-debug.log*", "pnpm-debug.log*"],
        ),
        ("OS", &[".DS_Store", "Thumbs.db"]),
        ("Database", &["*.db", "*.db-journal"]),
        ("Prisma", &[GENERATED_CLIENT_DIR]),
    ];

    sections
        .iter()
        .map(|(title, entries)| format!("# {}\n{}\n", title, entries.join("\n")))
        .collect::<Vec<_>>()
        .join("\n")
}
