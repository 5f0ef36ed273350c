//! Built-in themed vocabulary for an empty rhyme pool.

use crate::themes::Theme;

/// Seed words with their themes. Lowercase Bulgarian only, no duplicates.
pub const SEED_WORDS: &[(&str, Theme)] = &[
    // money
    ("пари", Theme::Money),
    ("вари", Theme::Money),
    ("цари", Theme::Money),
    ("кеш", Theme::Money),
    ("злато", Theme::Money),
    ("богат", Theme::Money),
    ("палат", Theme::Money),
    ("милион", Theme::Money),
    ("сезон", Theme::Money),
    ("банка", Theme::Money),
    ("лукс", Theme::Money),
    ("диамант", Theme::Money),
    ("талант", Theme::Money),
    ("печалба", Theme::Money),
    ("харча", Theme::Money),
    ("плащам", Theme::Money),
    ("печеля", Theme::Money),
    ("лари", Theme::Money),
    ("мерцедес", Theme::Money),
    ("интерес", Theme::Money),
    // love
    ("любов", Theme::Love),
    ("готов", Theme::Love),
    ("нов", Theme::Love),
    ("сърце", Theme::Love),
    ("лице", Theme::Love),
    ("ръце", Theme::Love),
    ("целувка", Theme::Love),
    ("усмивка", Theme::Love),
    ("страст", Theme::Love),
    ("власт", Theme::Love),
    ("мечта", Theme::Love),
    ("красота", Theme::Love),
    ("душа", Theme::Love),
    ("луна", Theme::Love),
    ("пламък", Theme::Love),
    ("очи", Theme::Love),
    ("мълчи", Theme::Love),
    ("обичам", Theme::Love),
    ("тичам", Theme::Love),
    ("роза", Theme::Love),
    // enemies
    ("враг", Theme::Enemies),
    ("прах", Theme::Enemies),
    ("страх", Theme::Enemies),
    ("мрак", Theme::Enemies),
    ("знак", Theme::Enemies),
    ("змия", Theme::Enemies),
    ("отрова", Theme::Enemies),
    ("лъжа", Theme::Enemies),
    ("нож", Theme::Enemies),
    ("мощ", Theme::Enemies),
    ("гняв", Theme::Enemies),
    ("битка", Theme::Enemies),
    ("война", Theme::Enemies),
    ("победа", Theme::Enemies),
    ("беда", Theme::Enemies),
    ("предател", Theme::Enemies),
    ("завист", Theme::Enemies),
    ("данък", Theme::Enemies),
    // party
    ("парти", Theme::Party),
    ("карти", Theme::Party),
    ("клуб", Theme::Party),
    ("бар", Theme::Party),
    ("нощ", Theme::Party),
    ("танц", Theme::Party),
    ("ритъм", Theme::Party),
    ("бийт", Theme::Party),
    ("купон", Theme::Party),
    ("телефон", Theme::Party),
    ("бутилка", Theme::Party),
    ("водка", Theme::Party),
    ("уиски", Theme::Party),
    ("музика", Theme::Party),
    ("кеф", Theme::Party),
    ("мая", Theme::Party),
    ("стая", Theme::Party),
    ("пия", Theme::Party),
    // street
    ("улица", Theme::Street),
    ("баница", Theme::Street),
    ("граница", Theme::Street),
    ("квартал", Theme::Street),
    ("метал", Theme::Street),
    ("блок", Theme::Street),
    ("скок", Theme::Street),
    ("гето", Theme::Street),
    ("махала", Theme::Street),
    ("асфалт", Theme::Street),
    ("закон", Theme::Street),
    ("банда", Theme::Street),
    ("куршум", Theme::Street),
    ("шум", Theme::Street),
    ("живот", Theme::Street),
    ("пот", Theme::Street),
    ("съдба", Theme::Street),
    ("борба", Theme::Street),
    ("влак", Theme::Street),
    ("врата", Theme::Street),
];
