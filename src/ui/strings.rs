//! User-facing text (pt-BR).

pub const LIST_TITLE: &str = "Comidas (API Pública)";
pub const LIST_DESCRIPTION: &str = "Lista de refeições carregadas da API TheMealDB.";
pub const LIST_LOADING: &str = "Carregando comidas...";
pub const LIST_ERROR: &str = "Não foi possível carregar as comidas.";
pub const LIST_EMPTY: &str = "Nenhuma comida encontrada.";

pub const ERROR_TITLE: &str = "Erro";

pub const DETAIL_TITLE: &str = "Detalhes";
pub const DETAIL_DESCRIPTION: &str = "Refeição selecionada na lista.";
pub const DETAIL_LOADING: &str = "Carregando detalhes...";
pub const DETAIL_MISSING_TITLE: &str = "Nenhuma refeição selecionada";
pub const DETAIL_MISSING_BODY: &str = "Abra a aba Home e toque em uma comida.";
pub const DETAIL_NOT_FOUND: &str = "Refeição não encontrada.";
pub const DETAIL_ERROR: &str = "Não foi possível carregar os detalhes.";
pub const DETAIL_INSTRUCTIONS: &str = "Instruções:";

pub const NO_CATEGORY: &str = "Sem categoria";
pub const UNKNOWN_AREA: &str = "Origem desconhecida";
pub const NO_INSTRUCTIONS: &str = "Nenhuma instrução encontrada.";

pub const BACK: &str = "Voltar";

/// `"<category> • <area>"` with placeholders for missing values.
pub fn meal_subtitle(category: Option<&str>, area: Option<&str>) -> String {
    format!(
        "{} • {}",
        category.unwrap_or(NO_CATEGORY),
        area.unwrap_or(UNKNOWN_AREA)
    )
}
