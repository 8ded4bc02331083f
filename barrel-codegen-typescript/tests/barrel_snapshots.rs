//! Snapshot tests for barrel generation.
//!
//! These tests verify that generated barrels match the expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use barrelgen_codegen::TypeScriptResolver;
use barrelgen_codegen_typescript::{BarrelCodegen, Generator, build_filesystem_barrel};
use barrelgen_config::BarrelConfig;
use barrelgen_core::{Directory, Location, QuoteCharacter, Style, Terminator};

fn single() -> Style {
    Style::new(QuoteCharacter::Single, Terminator::Semicolon)
}

fn body(modules: &[&str], style: Style) -> String {
    let directory = Directory::new("src");
    let modules: Vec<Location> = modules.iter().map(|path| Location::new(*path)).collect();
    build_filesystem_barrel(
        &directory,
        &modules,
        style,
        &TypeScriptResolver::new(),
        "JSONSchema",
    )
    .content
}

/// Build a directory tree from module paths under `src`.
fn tree(modules: &[&str]) -> Directory {
    let mut root = Directory::new("src");
    for module in modules {
        let relative = module.strip_prefix("src/").unwrap_or(module);
        let mut current = &mut root;
        let mut parts: Vec<&str> = relative.split('/').collect();
        let _file = parts.pop();
        for part in parts {
            let index = match current.directories.iter().position(|d| d.name == part) {
                Some(index) => index,
                None => {
                    let path = current.path.join(part);
                    current.directories.push(Directory::new(path));
                    current.directories.len() - 1
                }
            };
            current = &mut current.directories[index];
        }
        current.files.push(Location::new(*module));
    }
    root
}

#[test]
fn test_simple_barrel() {
    let content = body(&["src/a/One.ts", "src/Two.ts"], single());
    insta::assert_snapshot!(content, @r"
    import Twots from './Two';
    import aOnets from './a/One';
    export {Twots as Two};
    export const a = {
      'One': aOnets as JSONSchema,
    };
    ");
}

#[test]
fn test_nested_directories() {
    let content = body(
        &[
            "src/users/User.ts",
            "src/users/admin/Role.ts",
            "src/users/admin/Permission.ts",
            "src/orders/Order.ts",
            "src/Health.ts",
        ],
        single(),
    );
    insta::assert_snapshot!(content, @r"
    import Healthts from './Health';
    import ordersOrderts from './orders/Order';
    import usersUserts from './users/User';
    import usersadminPermissionts from './users/admin/Permission';
    import usersadminRolets from './users/admin/Role';
    export {Healthts as Health};
    export const orders = {
      'Order': ordersOrderts as JSONSchema,
    };
    export const users = {
      'User': usersUserts as JSONSchema,
      'admin': {
        'Permission': usersadminPermissionts as JSONSchema,
        'Role': usersadminRolets as JSONSchema,
      },
    };
    ");
}

#[test]
fn test_double_quotes_without_semicolons() {
    let style = Style::new(QuoteCharacter::Double, Terminator::None);
    let content = body(&["src/a/One.ts", "src/Two.ts"], style);
    insta::assert_snapshot!(content, @r#"
    import Twots from "./Two"
    import aOnets from "./a/One"
    export {Twots as Two}
    export const a = {
      "One": aOnets as JSONSchema,
    }
    "#);
}

#[test]
fn test_stripped_names_collide() {
    let content = body(&["src/Foo.ts", "src/Foo.bar.ts"], single());
    insta::assert_snapshot!(content, @r"
    import Foots from './Foo';
    import Foobarts from './Foo.bar';
    export {Foots as Foo};
    export {Foobarts as Foo};
    ");
}

#[test]
fn test_tsx_modules_keep_their_extension_in_the_alias() {
    let content = body(&["src/ui/Button.tsx"], single());
    insta::assert_snapshot!(content, @r"
    import uiButtontsx from './ui/Button';
    export const ui = {
      'Button': uiButtontsx as JSONSchema,
    };
    ");
}

#[test]
fn test_exports_sort_uppercase_first() {
    let content = body(&["src/b/Zed.ts", "src/Alpha.ts", "src/B/Upper.ts"], single());
    insta::assert_snapshot!(content, @r"
    import Alphats from './Alpha';
    import BUpperts from './B/Upper';
    import bZedts from './b/Zed';
    export {Alphats as Alpha};
    export const B = {
      'Upper': BUpperts as JSONSchema,
    };
    export const b = {
      'Zed': bZedts as JSONSchema,
    };
    ");
}

#[test]
fn test_empty_barrel() {
    assert_eq!(body(&[], single()), "");
}

#[test]
fn test_output_is_independent_of_input_order() {
    let modules = [
        "src/b/Zed.ts",
        "src/a/One.ts",
        "src/Two.ts",
        "src/a/c/Deep.ts",
        "src/A/Upper.ts",
    ];
    let mut reversed = modules;
    reversed.reverse();

    assert_eq!(body(&modules, single()), body(&reversed, single()));
}

#[test]
fn test_generated_file_with_header() {
    let config = BarrelConfig {
        quote: QuoteCharacter::Single,
        ..BarrelConfig::default()
    };
    let generator = Generator::from_roots(vec![tree(&["src/a/One.ts", "src/Two.ts"])], &config);
    let preview = generator.preview();

    assert_eq!(preview.len(), 1);
    insta::assert_snapshot!(preview[0].content, @r"
    /**
     * @file Automatically generated by barrelgen.
     * Run `barrel generate` from the project root to regenerate
     */

    import { JSONSchema } from 'json-schema-typed';

    import Twots from './Two';
    import aOnets from './a/One';
    export {Twots as Two};
    export const a = {
      'One': aOnets as JSONSchema,
    };
    ");
}

#[test]
fn test_base_url_imports() {
    let config = BarrelConfig {
        quote: QuoteCharacter::Single,
        header: false,
        base_url: Some("src".into()),
        location: barrelgen_config::LocationMode::Below,
        ..BarrelConfig::default()
    };
    let generator = Generator::from_roots(vec![tree(&["src/a/One.ts", "src/a/b/Two.ts"])], &config);
    let preview = generator.preview();

    assert_eq!(preview.len(), 1);
    insta::assert_snapshot!(preview[0].content, @r"
    import Onets from 'a/One';
    import bTwots from 'a/b/Two';
    export {Onets as One};
    export const b = {
      'Two': bTwots as JSONSchema,
    };
    ");
}
