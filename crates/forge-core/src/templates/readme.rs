//! README rendering
//!
//! The README is assembled from sections. The commands table is derived from
//! the same script table that `package.json` is rendered from, and the project
//! tree from the same language mode that picks file extensions, so the
//! documentation cannot describe files or scripts the project does not have.

use super::manifest;
use super::variant::{LanguageMode, RenderContext};
use crate::config::PackageManager;

/// Script descriptions, in the order they appear in the commands table
const SCRIPT_DOCS: &[(&str, &str)] = &[
    ("dev", "Start the development server with file watching"),
    ("build", "Compile TypeScript into `dist/`"),
    ("start", "Run the server without watching"),
    ("db:generate", "Generate the Prisma client"),
    ("db:migrate", "Create and apply a development migration"),
    ("db:studio", "Open Prisma Studio to browse data"),
];

/// Dependencies whose install scripts pnpm must be allowed to run
const NATIVE_BUILD_PACKAGES: &[&str] = &["better-sqlite3", "prisma", "@prisma/engines"];

fn line(out: &mut String, text: impl AsRef<str>) {
    out.push_str(text.as_ref());
    out.push('\n');
}

struct TreeNode {
    name: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    fn dir(name: &str, children: Vec<TreeNode>) -> Self {
        Self {
            name: format!("{}/", name),
            children,
        }
    }
}

fn write_tree(out: &mut String, nodes: &[TreeNode], prefix: &str) {
    for (i, node) in nodes.iter().enumerate() {
        let last = i + 1 == nodes.len();
        let (branch, indent) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        line(out, format!("{}{}{}", prefix, branch, node.name));
        write_tree(out, &node.children, &format!("{}{}", prefix, indent));
    }
}

fn project_tree(ctx: &RenderContext) -> String {
    let ext = ctx.language.source_ext();

    let mut src = vec![
        TreeNode::dir("config", vec![]),
        TreeNode::dir("controllers", vec![]),
        TreeNode::dir("generated", vec![TreeNode::dir("prisma", vec![])]),
        TreeNode::dir("lib", vec![TreeNode::file(format!("prisma.{}", ext))]),
        TreeNode::dir(
            "middlewares",
            vec![TreeNode::file(format!("error.middleware.{}", ext))],
        ),
        TreeNode::dir("models", vec![]),
        TreeNode::dir("routes", vec![]),
    ];
    if ctx.language.is_typescript() {
        src.push(TreeNode::dir("types", vec![]));
    }
    src.push(TreeNode::dir("utils", vec![]));
    src.push(TreeNode::file(format!("index.{}", ext)));

    let mut root = vec![
        TreeNode::dir("prisma", vec![TreeNode::file("schema.prisma")]),
        TreeNode::dir("public", vec![]),
        TreeNode::dir("requests", vec![]),
        TreeNode::dir("src", src),
        TreeNode::file(".env"),
        TreeNode::file(".gitignore"),
        TreeNode::file("package.json"),
        TreeNode::file("prisma.config.ts"),
    ];
    if ctx.language.is_typescript() {
        root.push(TreeNode::file("tsconfig.json"));
    }

    let mut out = format!("{}/\n", ctx.project_name);
    write_tree(&mut out, &root, "");
    out
}

fn write_intro(out: &mut String, ctx: &RenderContext) {
    line(out, format!("# {}\n", ctx.project_name));
    line(
        out,
        format!(
            "A REST API built with Express and Prisma ORM on SQLite, written in {}.\n",
            ctx.language.display_name()
        ),
    );
    line(out, "## Prerequisites\n");
    line(out, "- Node.js 20.6 or newer (for `--env-file` support)");
    line(out, format!("- {}\n", ctx.package_manager.name()));
}

fn write_getting_started(out: &mut String, ctx: &RenderContext) {
    let pm = ctx.package_manager;
    let mut step = 1;

    line(out, "## Getting Started\n");

    line(out, format!("### {}. Install dependencies\n", step));
    line(out, format!("```bash\n{}\n```\n", pm.install_command()));
    step += 1;

    if pm.requires_build_approval() {
        let packages = NATIVE_BUILD_PACKAGES
            .iter()
            .map(|p| format!("`{}`", p))
            .collect::<Vec<_>>()
            .join(", ");

        line(out, format!("### {}. Approve native builds\n", step));
        line(
            out,
            format!(
                "pnpm does not run dependency build scripts until you approve them. \
                 Approve the following packages when prompted: {}.\n",
                packages
            ),
        );
        line(out, "```bash\npnpm approve-builds\n```\n");
        step += 1;
    }

    line(out, format!("### {}. Set up the database\n", step));
    line(
        out,
        "The connection string lives in `.env` (`DATABASE_URL`). \
         Generate the client and create the SQLite database:\n",
    );
    line(
        out,
        format!(
            "```bash\n{}\n{}\n```\n",
            pm.run("db:generate"),
            pm.run("db:migrate")
        ),
    );
    step += 1;

    line(out, format!("### {}. Start the server\n", step));
    line(out, format!("```bash\n{}\n```\n", pm.run("dev")));
    line(
        out,
        "The API is served at http://localhost:3000 (override with `PORT` in `.env`).\n",
    );
}

fn write_commands(out: &mut String, ctx: &RenderContext) {
    let pm = ctx.package_manager;
    let scripts = manifest::scripts(ctx.language);

    line(out, "## Commands\n");
    line(out, "| Command | Description |");
    line(out, "| --- | --- |");
    for (script, description) in SCRIPT_DOCS {
        if scripts.contains_key(*script) {
            line(out, format!("| `{}` | {} |", pm.run(script), description));
        }
    }
    line(out, "");

    // Sources import each other without extensions (bundler resolution), which
    // plain `tsc` output keeps, so Node cannot load `dist/` as emitted.
    if let LanguageMode::TypeScript = ctx.language {
        line(
            out,
            format!(
                "`{}` type-checks the project and emits `dist/`. Imports inside `src/` \
                 omit file extensions, so the emitted files must be bundled (or rewritten \
                 to include `.js` extensions) before `{}` can load them. Use `{}` for \
                 local development.\n",
                pm.run("build"),
                pm.run("start"),
                pm.run("dev")
            ),
        );
    }
}

fn write_structure(out: &mut String, ctx: &RenderContext) {
    line(out, "## Project Structure\n");
    line(out, format!("```\n{}```\n", project_tree(ctx)));
}

fn write_troubleshooting(out: &mut String, ctx: &RenderContext) {
    let pm = ctx.package_manager;

    line(out, "## Troubleshooting\n");

    line(out, "### Port already in use\n");
    line(out, "Change `PORT` in `.env` or stop the process using port 3000.\n");

    line(out, "### Cannot find module '../generated/prisma'\n");
    line(
        out,
        format!(
            "The Prisma client is generated, not committed. Run `{}` after every schema change.\n",
            pm.run("db:generate")
        ),
    );

    match pm {
        PackageManager::Pnpm => {
            line(out, "### Could not locate the bindings file (pnpm)\n");
            line(
                out,
                "`better-sqlite3` was installed without running its build script. \
                 Approve it and rebuild:\n",
            );
            line(out, "```bash\npnpm approve-builds\npnpm rebuild better-sqlite3\n```");
        }
        PackageManager::Npm => {
            line(out, "### Native module build fails (npm)\n");
            line(
                out,
                "`better-sqlite3` compiles from source when no prebuilt binary matches \
                 your platform. Make sure a C++ toolchain is installed, then reinstall:\n",
            );
            line(
                out,
                "```bash\nrm -rf node_modules package-lock.json\nnpm cache clean --force\nnpm install\n```",
            );
        }
        PackageManager::Yarn => {
            line(out, "### Modules not found under Plug'n'Play (yarn)\n");
            line(
                out,
                "Prisma and `better-sqlite3` need a `node_modules` folder. \
                 With Yarn 2 or newer, switch the linker and reinstall:\n",
            );
            line(out, "```bash\nyarn config set nodeLinker node-modules\nyarn install\n```");
        }
    }
}

/// Render `README.md`
pub fn render_readme(ctx: &RenderContext) -> String {
    let mut out = String::new();
    write_intro(&mut out, ctx);
    write_getting_started(&mut out, ctx);
    write_commands(&mut out, ctx);
    write_structure(&mut out, ctx);
    write_troubleshooting(&mut out, ctx);
    out
}
