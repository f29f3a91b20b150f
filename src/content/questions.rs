//! The authored city quiz

use crate::quiz::Question;

/// (prompt, hint, options); the first option is always the correct one
const QUESTION_BANK: [(&str, &str, [&str; 4]); 12] = [
    (
        "Which place offers one of the best panoramic views over Lugano?",
        "A sunny mountain above the city, popular for sunsets.",
        ["Monte Brè", "Parco Ciani", "Via Nassa", "Piazza della Riforma"],
    ),
    (
        "Which place is often called the “sugar loaf of Switzerland”?",
        "A steep mountain rising directly above the lake.",
        ["Monte San Salvatore", "Belvedere Gardens", "Gandria Village", "Cathedral of Saint Lawrence"],
    ),
    (
        "Where can you enjoy a calm walk surrounded by trees next to the lake?",
        "One of the most photographed parks in Lugano.",
        ["Parco Ciani", "Castagnola Viewpoint", "Via Nassa", "Contrada di Verla"],
    ),
    (
        "Which street is known for elegant arcades and shopping?",
        "A historic street dating back to medieval times.",
        ["Via Nassa", "Piazza della Riforma", "Lungolago", "Cassina d’Agno"],
    ),
    (
        "Which place is the main square of Lugano?",
        "A lively spot surrounded by cafés and city life.",
        ["Piazza della Riforma", "Cathedral of Saint Lawrence", "Belvedere Park", "Monte Brè"],
    ),
    (
        "Where can you see one of the most important Renaissance frescoes in Switzerland?",
        "A historic church near the old town.",
        ["Santa Maria degli Angioli", "Cathedral of Saint Lawrence", "Parco San Michele", "Gandria Village"],
    ),
    (
        "Which place offers elevated views and a quiet atmosphere, mostly visited by locals?",
        "A small park away from tourist crowds.",
        ["Parco San Michele", "Belvedere Gardens", "Lungolago", "Via Nassa"],
    ),
    (
        "Where can you enjoy a long walk along the lake promenade?",
        "A popular waterfront path connecting key areas of the city.",
        ["Lungolago", "Cassina d’Agno", "Monte Brè", "Old Town"],
    ),
    (
        "Which place is a scenic walk carved into rocks above the lake?",
        "A path leading to a charming lakeside village.",
        ["Gandria Village Walk", "Belvedere Park", "Parco Ciani", "Via Nassa"],
    ),
    (
        "Which place offers a calm lakeside atmosphere away from the city center?",
        "A spot more popular with locals than tourists.",
        ["Cassina d’Agno Lakeside", "Piazza della Riforma", "Monte San Salvatore", "Parco Ciani"],
    ),
    (
        "Which place is known for classic Swiss hospitality and light meals?",
        "An elegant café-restaurant near the city center.",
        ["Grand Café Lobby", "Spaghetti Store", "Caffè Vanini", "Manora Restaurant"],
    ),
    (
        "Which place offers one of the best dining views over Lugano?",
        "A restaurant located above the city.",
        ["Manora Restaurant", "Grand Café Al Porto", "Via Nassa", "Parco San Michele"],
    ),
];

/// Build the twelve city questions in play order
pub fn city_questions() -> Vec<Question> {
    QUESTION_BANK
        .iter()
        .map(|(prompt, hint, options)| Question {
            prompt: prompt.to_string(),
            hint: hint.to_string(),
            options: options.map(str::to_string),
            correct_index: 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bank_has_twelve_well_formed_questions() {
        let questions = city_questions();
        assert_eq!(questions.len(), 12);

        for question in &questions {
            assert!(!question.prompt.is_empty());
            assert!(!question.hint.is_empty());
            let distinct: HashSet<_> = question.options.iter().collect();
            assert_eq!(distinct.len(), 4, "duplicate option in {:?}", question.prompt);
        }
    }
}
