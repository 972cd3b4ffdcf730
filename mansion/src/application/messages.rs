//! User-facing text of the mansion dialogue.

// Startup
pub const TITLE: &str = "Construtor de mansão (árvore binária de cômodos)\n";
pub const MODE_PROMPT: &str = "Deseja construir a árvore manualmente? (s/n) [n = árvore de exemplo]: ";
pub const MANUAL_INTRO: &str = "\nIniciando construção manual da árvore. Para não criar um nó, pressione ENTER quando solicitado para o nome.\n";
pub const SAMPLE_CREATED: &str = "Árvore de exemplo criada.\n";

// Manual build
pub const NAME_PROMPT: &str = "Digite o nome do cômodo (ou ENTER para nenhum nó nesta posição): ";

pub fn left_child_prompt(name: &str) -> String {
    format!("Criar cômodo à esquerda de '{name}'? (s/n): ")
}

pub fn right_child_prompt(name: &str) -> String {
    format!("Criar cômodo à direita de '{name}'? (s/n): ")
}

pub fn depth_limit_reached(name: &str, limit: usize) -> String {
    format!("Profundidade máxima ({limit}) atingida. '{name}' será um cômodo-folha.\n")
}

// Exploration
pub const EMPTY_MANSION: &str = "Arvore vazia. Nada para explorar.\n";
pub const EXPLORATION_STARTED: &str = "\n--- Exploração da mansão iniciada ---\n";
pub const EXPLORATION_FINISHED: &str = "--- Exploração finalizada ---\n\n";
pub const LEAF_REACHED: &str = "\nVocê alcançou um cômodo-folha. Fim do caminho.\n";
pub const OPTIONS_HEADER: &str = "Opções disponíveis:";
pub const QUIT_OPTION: &str = " [q] Sair\n";
pub const CHOICE_PROMPT: &str = "Escolha (l/r/q): ";
pub const EMPTY_CHOICE: &str = "Entrada vazia. Tente novamente.\n";
pub const QUITTING: &str = "Saindo da exploração...\n";
pub const NO_PATH_LEFT: &str = "Não existe caminho à esquerda. Tente outra opção.\n";
pub const NO_PATH_RIGHT: &str = "Não existe caminho à direita. Tente outra opção.\n";
pub const INVALID_OPTION: &str = "Opção inválida. Use 'l', 'r' ou 'q'.\n";

pub fn current_room(name: &str) -> String {
    format!("Você está em: {name}\n")
}

pub fn left_option(name: &str) -> String {
    format!(" [l] Ir para a esquerda -> {name}")
}

pub fn right_option(name: &str) -> String {
    format!(" [r] Ir para a direita -> {name}")
}

pub const MAP_HEADER: &str = "\nMapa da mansão:\n";

pub fn trail(names: &[String]) -> String {
    format!("Cômodos visitados: {}\n", names.join(" -> "))
}

/// `true` when the answer starts with `s`/`S` ("sim").
pub fn is_yes(answer: Option<&str>) -> bool {
    matches!(answer.and_then(|a| a.chars().next()), Some('s' | 'S'))
}
