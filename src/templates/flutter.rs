//! Flutter project template

use crate::core::ScaffoldResult;
use crate::process::CommandSpec;
use crate::project::{Folder, ProjectContext};
use crate::scaffold::{Edit, FilePatch, Recipe, Step};
use crate::templates::{cd_hint, Template};

const FOLDERS: &[Folder] = &[
    Folder::new("core", "# Core\n\nApp-wide constants, themes, and error handling."),
    Folder::new("models", "# Models\n\nPlain data classes and serialization."),
    Folder::new("services", "# Services\n\nAPI clients, storage, and platform integrations."),
    Folder::new("providers", "# State Management\n\nProviders, blocs, or notifiers holding app state."),
    Folder::new("screens", "# Screens\n\nFull-page widgets mapped to routes."),
    Folder::new("widgets", "# Widgets\n\nReusable UI components."),
    Folder::new("utils", "# Utilities\n\nHelper functions and extensions."),
];

/// Flutter template
pub struct FlutterTemplate;

impl Template for FlutterTemplate {
    fn name(&self) -> &str {
        "flutter"
    }

    fn recipe(&self, ctx: &ProjectContext) -> ScaffoldResult<Recipe> {
        let name = ctx.name.as_str();
        let project = &ctx.paths.project_dir;
        let home_title = format!("{} with Flutter - {}", ctx.display_name, ctx.timestamp);

        let recipe = Recipe::new()
            .stage(
                format!("Initialising Flutter project: {}", name),
                vec![Step::Run(CommandSpec::new("flutter", &ctx.paths.tech_dir).args([
                    "create".to_string(),
                    "--org".to_string(),
                    ctx.config.spring.group_id.clone(),
                    "--project-name".to_string(),
                    ctx.name.snake_case(),
                    name.to_string(),
                ]))],
            )
            .stage(
                "Creating suggested folder structure",
                vec![Step::SuggestedFolders {
                    base: ctx.project_file("lib"),
                    folders: FOLDERS.to_vec(),
                }],
            )
            .stage(
                "Preparing the base project",
                vec![Step::Patch(
                    FilePatch::new(ctx.project_file("lib/main.dart"))
                        .edit(Edit::regex(
                            r"title: '[^']*'",
                            format!("title: '{}'", ctx.display_name),
                        ))
                        .edit(Edit::regex(
                            r"MyHomePage\(title: '[^']*'\)",
                            format!("MyHomePage(title: '{}')", home_title),
                        )),
                )],
            )
            .serve(CommandSpec::new("flutter", project).arg("run"))
            .next_step(cd_hint(ctx))
            .next_step("flutter run");

        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::apply_edits;
    use crate::templates::testing;
    use std::path::Path;

    const MAIN_DART: &str = "class MyApp extends StatelessWidget {\n  @override\n  Widget build(BuildContext context) {\n    return MaterialApp(\n      title: 'Flutter Demo',\n      home: const MyHomePage(title: 'Flutter Demo Home Page'),\n    );\n  }\n}\n";

    #[test]
    fn test_create_uses_snake_case_package() {
        let ctx = testing::context(Path::new("/work"), "flutter", "pocket-notes");
        let recipe = FlutterTemplate.recipe(&ctx).unwrap();

        let create = recipe.commands().next().unwrap();
        assert_eq!(
            create.display(),
            "flutter create --org net.maquestiaux --project-name pocket_notes pocket-notes"
        );
        assert_eq!(recipe.serve.as_ref().unwrap().cwd, ctx.paths.project_dir);
    }

    #[test]
    fn test_main_dart_titles() {
        let ctx = testing::context(Path::new("/work"), "flutter", "pocket-notes");
        let recipe = FlutterTemplate.recipe(&ctx).unwrap();

        let patch = recipe
            .steps()
            .find_map(|step| match step {
                Step::Patch(patch) => Some(patch),
                _ => None,
            })
            .unwrap();

        let out = apply_edits(MAIN_DART, &patch.edits).unwrap();
        assert!(out.contains("title: 'Pocket Notes',"));
        assert!(out.contains("MyHomePage(title: 'Pocket Notes with Flutter - "));
        assert!(!out.contains("Flutter Demo"));
    }
}
