//! End-to-end tests of a whole session: startup, build, map, exploration, trail

use std::io::Cursor;
use std::num::NonZeroUsize;

use mansion::application::services::{BuildMode, Outcome};
use mansion::cli::commands::run;
use mansion::config::Settings;
use mansion::infrastructure::traits::TextConsole;
use mansion::util::testing;

type ScriptedConsole = TextConsole<Cursor<String>, Vec<u8>>;

fn console(input: &str) -> ScriptedConsole {
    testing::init_test_setup();
    TextConsole::new(Cursor::new(input.to_string()), Vec::new())
}

fn transcript(console: ScriptedConsole) -> String {
    String::from_utf8(console.into_writer()).expect("utf-8 transcript")
}

#[test]
fn given_default_settings_when_declining_manual_build_then_matches_documented_session() {
    let mut console = console("n\nl\nr\n");

    let exploration = run(&Settings::default(), None, &mut console).unwrap();

    assert_eq!(exploration.outcome, Outcome::Leaf);
    assert_eq!(
        transcript(console),
        concat!(
            "Construtor de mansão (árvore binária de cômodos)\n",
            "Deseja construir a árvore manualmente? (s/n) [n = árvore de exemplo]: ",
            "Árvore de exemplo criada.\n",
            "\n--- Exploração da mansão iniciada ---\n",
            "Você está em: Entrada\n",
            "Opções disponíveis: [l] Ir para a esquerda -> Sala de Estar [r] Ir para a direita -> Cozinha [q] Sair\n",
            "Escolha (l/r/q): ",
            "Você está em: Sala de Estar\n",
            "Opções disponíveis: [l] Ir para a esquerda -> Biblioteca [r] Ir para a direita -> Jardim [q] Sair\n",
            "Escolha (l/r/q): ",
            "Você está em: Jardim\n",
            "\nVocê alcançou um cômodo-folha. Fim do caminho.\n",
            "--- Exploração finalizada ---\n\n",
        )
    );
}

#[test]
fn given_trail_enabled_when_exploring_then_prints_visited_rooms() {
    let settings = Settings {
        show_trail: true,
        ..Settings::default()
    };
    let mut console = console("r\nr\n");

    run(&settings, Some(BuildMode::Sample), &mut console).unwrap();

    assert!(transcript(console)
        .ends_with("Cômodos visitados: Entrada -> Cozinha -> Quarto Principal\n"));
}

#[test]
fn given_map_enabled_when_running_then_prints_map_before_exploring() {
    let settings = Settings {
        show_map: true,
        ..Settings::default()
    };
    let mut console = console("q\n");

    run(&settings, Some(BuildMode::Sample), &mut console).unwrap();

    let out = transcript(console);
    let map_at = out.find("Mapa da mansão:").expect("map header");
    let walk_at = out.find("--- Exploração da mansão iniciada ---").expect("walk header");
    assert!(map_at < walk_at);
    assert!(out.contains("[r] Quarto Principal"));
    assert!(out.contains("[l] Biblioteca"));
}

#[test]
fn given_empty_manual_build_when_trail_enabled_then_trail_stays_silent() {
    let settings = Settings {
        show_trail: true,
        ..Settings::default()
    };
    let mut console = console("\n");

    let exploration = run(&settings, Some(BuildMode::Manual), &mut console).unwrap();

    assert_eq!(exploration.outcome, Outcome::Empty);
    let out = transcript(console);
    assert!(out.ends_with("Arvore vazia. Nada para explorar.\n"));
    assert!(!out.contains("Cômodos visitados"));
}

#[test]
fn given_depth_limit_setting_when_building_manually_then_root_becomes_leaf() {
    let settings = Settings {
        max_depth: NonZeroUsize::new(1),
        ..Settings::default()
    };
    let mut console = console("Hall\n");

    let exploration = run(&settings, Some(BuildMode::Manual), &mut console).unwrap();

    assert_eq!(exploration.outcome, Outcome::Leaf);
    assert_eq!(exploration.trail, vec!["Hall"]);
}
