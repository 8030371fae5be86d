use std::fs;
use std::process::Command;

use tgt_core::transform::{self, PatchOptions};
use tgt_core::{CodeGenerator, parse};
use tgt_typescript::{TypeScriptConfig, TypeScriptGenerator};

const MINI: &str = include_str!("../../tgt-core/tests/fixtures/mini-bot-api.json");

#[test]
#[ignore] // Requires Node.js and npm registry access
fn generated_declarations_compile() {
    let options = PatchOptions {
        currencies: vec!["USD".to_string(), "EUR".to_string()],
    };
    let schema = transform::apply(parse::from_json(MINI).unwrap(), &options).unwrap();
    let files = TypeScriptGenerator
        .generate(&schema, &TypeScriptConfig::default())
        .unwrap();

    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();

    for file in &files {
        fs::write(dir.join(&file.path), &file.content).unwrap();
    }

    let tsconfig = r#"{
  "compilerOptions": {
    "strict": true,
    "target": "ES2022",
    "module": "ES2022",
    "moduleResolution": "bundler",
    "lib": ["ES2022", "DOM"],
    "noEmit": true
  },
  "include": ["*.d.ts"]
}"#;
    fs::write(dir.join("tsconfig.json"), tsconfig).unwrap();

    let package_json = r#"{
  "name": "telegram-types-compile-check",
  "private": true,
  "devDependencies": {
    "typescript": "^5.6.0"
  }
}"#;
    fs::write(dir.join("package.json"), package_json).unwrap();

    let install = Command::new("npm")
        .args(["install", "--no-audit", "--no-fund"])
        .current_dir(dir)
        .output()
        .expect("failed to run npm install");
    if !install.status.success() {
        panic!(
            "npm install failed:\n{}",
            String::from_utf8_lossy(&install.stderr)
        );
    }
    assert!(
        dir.join("node_modules/typescript/bin/tsc").exists(),
        "typescript compiler was not installed"
    );

    let output = Command::new("npx")
        .args(["--no-install", "tsc", "--noEmit"])
        .current_dir(dir)
        .output()
        .expect("failed to run tsc");

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!(
            "TypeScript compilation failed:\nstdout: {}\nstderr: {}",
            stdout, stderr
        );
    }
}
