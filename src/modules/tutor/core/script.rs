// Dieguito's answer script.
//
// An ordered list of (predicate, response) lines evaluated against the
// lowercased message; the first matching line answers, otherwise the
// fallback does. No state, no I/O.

pub struct ScriptLine {
    pub matches: fn(&str) -> bool,
    pub response: &'static str,
}

pub const FALLBACK: &str = "Ainda não sei responder isso. Pergunte sobre as cinco competências, \
a estrutura da redação, a nota ou o agendamento no laboratório de redação.";

pub static SCRIPT: &[ScriptLine] = &[
    ScriptLine {
        matches: asks_about_formal_writing,
        response: "A Competência 1 avalia o domínio da norma culta. Revise gramática, ortografia \
e concordância, e pratique escrita formal diariamente.",
    },
    ScriptLine {
        matches: asks_about_theme,
        response: "A Competência 2 avalia a compreensão do tema. Identifique as palavras-chave da \
proposta e mantenha todos os parágrafos ligados a elas para não tangenciar.",
    },
    ScriptLine {
        matches: asks_about_arguments,
        response: "A Competência 3 avalia a argumentação. Sustente cada argumento com dados, \
exemplos ou citações e use repertório sociocultural pertinente.",
    },
    ScriptLine {
        matches: asks_about_cohesion,
        response: "A Competência 4 avalia coesão e coerência. Use conectivos variados entre e \
dentro dos parágrafos e abra cada um com um tópico frasal claro.",
    },
    ScriptLine {
        matches: asks_about_proposal,
        response: "A Competência 5 avalia a proposta de intervenção. Inclua agente, ação, \
modo/meio, efeito e detalhamento, sempre respeitando os direitos humanos.",
    },
    ScriptLine {
        matches: asks_about_structure,
        response: "Uma boa redação do ENEM tem introdução com tese, dois parágrafos de \
desenvolvimento e uma conclusão com a proposta de intervenção.",
    },
    ScriptLine {
        matches: asks_about_score,
        response: "A nota vai de 0 a 1000: cada uma das cinco competências vale até 200 pontos. \
Acompanhe sua evolução no painel e mire em 900.",
    },
    ScriptLine {
        matches: asks_about_booking,
        response: "Você pode reservar um horário no laboratório de redação pela página de \
agendamentos, com até 30 dias de antecedência.",
    },
    ScriptLine {
        matches: greets,
        response: "Olá! Eu sou o Dieguito, seu assistente virtual para dúvidas sobre redação do \
ENEM. Como posso ajudar você hoje?",
    },
];

pub fn reply(message: &str) -> &'static str {
    let input = message.to_lowercase();
    SCRIPT
        .iter()
        .find(|line| (line.matches)(&input))
        .map_or(FALLBACK, |line| line.response)
}

fn mentions_any(input: &str, fragments: &[&str]) -> bool {
    fragments.iter().any(|fragment| input.contains(fragment))
}

fn says_any_word(input: &str, words: &[&str]) -> bool {
    input
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| words.contains(&word))
}

fn asks_about_formal_writing(input: &str) -> bool {
    says_any_word(input, &["c1"]) || mentions_any(input, &["norma culta", "gramática", "ortografia"])
}

fn asks_about_theme(input: &str) -> bool {
    says_any_word(input, &["c2", "tema"]) || mentions_any(input, &["tangenci"])
}

fn asks_about_arguments(input: &str) -> bool {
    says_any_word(input, &["c3"]) || mentions_any(input, &["argument", "repertório"])
}

fn asks_about_cohesion(input: &str) -> bool {
    says_any_word(input, &["c4"]) || mentions_any(input, &["coesão", "coerência", "conectivo"])
}

fn asks_about_proposal(input: &str) -> bool {
    says_any_word(input, &["c5"]) || mentions_any(input, &["proposta", "intervenção"])
}

fn asks_about_structure(input: &str) -> bool {
    mentions_any(input, &["estrutura", "parágrafo", "introdução", "conclusão"])
}

fn asks_about_score(input: &str) -> bool {
    says_any_word(input, &["nota", "notas", "1000", "pontuação"])
}

fn asks_about_booking(input: &str) -> bool {
    mentions_any(input, &["agend", "laboratório", "horário"])
}

fn greets(input: &str) -> bool {
    says_any_word(input, &["oi", "olá", "ola"])
        || mentions_any(input, &["bom dia", "boa tarde", "boa noite"])
}
