//! Theme keyword table.
//!
//! Bulgarian keywords first, then the Serbian/Bosnian, Romanian, English, and
//! French words that show up in pasted reference lyrics. All lowercase.

use crate::themes::Theme;

/// Keywords per theme, in tie-break order.
pub const THEME_KEYWORDS: &[(Theme, &[&str])] = &[
    (
        Theme::Money,
        &[
            "пари", "кеш", "лари", "милион", "богат", "злато", "златен", "банка", "печалба",
            "бизнес", "скъп", "евро", "долар", "хиляда", "капитал", "лукс", "диамант",
            "мерцедес", "ролекс", "вила", "харча", "купувам", "плащам", "трупам", "печеля",
            "хвърлям", "money", "cash", "rich", "gold", "diamond", "million", "pare", "novac",
            "bani", "bogat", "argent", "riche",
        ],
    ),
    (
        Theme::Love,
        &[
            "любов", "сърце", "целувка", "обич", "страст", "желание", "мечта", "ангел",
            "красива", "очи", "устни", "душа", "огън", "пламък", "луна", "звезда", "роза",
            "цвете", "обичам", "целувам", "копнея", "горя", "шептя", "love", "heart", "kiss",
            "passion", "dream", "angel", "ljubav", "srce", "poljubac", "dragoste", "inima",
            "amour", "coeur",
        ],
    ),
    (
        Theme::Enemies,
        &[
            "враг", "омраза", "завист", "предател", "измама", "лъжа", "змия", "отрова", "нож",
            "битка", "война", "победа", "гняв", "сила", "мощ", "власт", "страх", "отмъщение",
            "мразя", "унищожавам", "разбивам", "побеждавам", "enemy", "hate", "envy",
            "traitor", "revenge", "power", "neprijatelj", "mrznja", "osveta", "dusman",
            "ennemi", "haine",
        ],
    ),
    (
        Theme::Party,
        &[
            "парти", "клуб", "дискотека", "бар", "бутилка", "уиски", "водка", "шампанско",
            "танц", "ритъм", "бийт", "музика", "нощ", "купон", "веселба", "адреналин", "кеф",
            "танцувам", "пия", "лудувам", "скачам", "крещя", "пея", "party", "club", "dance",
            "drink", "night", "fun", "zurka", "noć", "ples", "petrecere", "noapte", "fête",
            "nuit",
        ],
    ),
    (
        Theme::Street,
        &[
            "улица", "квартал", "блок", "гето", "махала", "асфалт", "полиция", "закон",
            "гангстер", "мафия", "бос", "банда", "оръжие", "куршум", "бягам", "крия",
            "оцелявам", "тежко", "жестоко", "реално", "живот", "съдба", "street", "hood",
            "block", "ghetto", "gang", "police", "gun", "ulica", "kvart", "stradă", "cartier",
            "rue", "quartier",
        ],
    ),
];
