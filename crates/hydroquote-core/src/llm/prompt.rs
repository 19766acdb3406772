//! Prompt templates for the two enrichment operations.
//!
//! Prompts are written in Portuguese because the quotations they feed are.
//! Caller text is embedded verbatim.

use crate::types::ItemCategory;

/// Prompt asking the model to polish (or seed) the "Observações" section.
pub fn refine_notes(current_notes: &str, project_type: &str) -> String {
    format!(
        "Você é um especialista em orçamentos de engenharia civil e impermeabilização.\n\
         Melhore o seguinte texto de 'Observações' para um orçamento profissional.\n\
         Mantenha o tom formal, claro e técnico.\n\
         \n\
         Tipo do Projeto: {project_type}\n\
         Texto atual: \"{current_notes}\"\n\
         \n\
         Se o texto atual for muito simples (ex: \"zero observações\"), sugira 3 tópicos \
         padrões importantes para orçamentos de impermeabilização (ex: tempo de cura, \
         necessidade de superfície limpa, garantia).\n\
         Retorne apenas o texto aprimorado, sem aspas ou preâmbulos."
    )
}

/// Prompt asking the model to expand a keyword into a line-item description.
pub fn suggest_description(category: ItemCategory, keyword: &str) -> String {
    format!(
        "Aja como um orçamentista de obras.\n\
         Escreva uma descrição técnica curta e profissional para um item de linha em um orçamento.\n\
         \n\
         Contexto: Orçamento de Impermeabilização.\n\
         Categoria: {}.\n\
         Palavra-chave/Ideia do usuário: \"{keyword}\"\n\
         \n\
         Retorne apenas a descrição sugerida (ex: \"Manta asfáltica aluminizada 3mm...\").",
        category.label()
    )
}
