//! Static geographic lookup tables
//!
//! The government feed keys countries by a provider-specific numeric code
//! (mostly the international dialling prefix, with feed-specific exceptions
//! such as `1000` for the mainland US and `1808` for Hawaii). These tables
//! are immutable process-wide data; the ordered slices are the source of
//! truth and the lazy maps exist for O(1) exact lookups.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::safety::{Embassy, EmergencyContact};

/// Provider-specific country code in the safety feed (not ISO)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryCode(&'static str);

impl CountryCode {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// The code with leading zeros trimmed, as used in feed deep links
    pub fn trimmed(&self) -> &'static str {
        self.0.trim_start_matches('0')
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Destination name (country, city or region, Japanese) → feed country code.
/// Iteration order is the declaration order; partial matching depends on it.
pub static DESTINATION_TO_COUNTRY_CODE: &[(&str, &str)] = &[
    // アジア
    ("韓国", "0082"),
    ("韓国（ソウル）", "0082"),
    ("ソウル", "0082"),
    ("釜山", "0082"),
    ("中国", "0086"),
    ("北京", "0086"),
    ("上海", "0086"),
    ("香港", "0852"),
    ("マカオ", "0853"),
    ("台湾", "0886"),
    ("台北", "0886"),
    ("タイ", "0066"),
    ("バンコク", "0066"),
    ("チェンマイ", "0066"),
    ("プーケット", "0066"),
    ("ベトナム", "0084"),
    ("ハノイ", "0084"),
    ("ホーチミン", "0084"),
    ("ダナン", "0084"),
    ("シンガポール", "0065"),
    ("マレーシア", "0060"),
    ("クアラルンプール", "0060"),
    ("インドネシア", "0062"),
    ("バリ", "0062"),
    ("ジャカルタ", "0062"),
    ("フィリピン", "0063"),
    ("マニラ", "0063"),
    ("セブ", "0063"),
    ("カンボジア", "0855"),
    ("シェムリアップ", "0855"),
    ("プノンペン", "0855"),
    ("ミャンマー", "0095"),
    ("ラオス", "0856"),
    ("ブルネイ", "0673"),
    ("インド", "0091"),
    ("デリー", "0091"),
    ("ムンバイ", "0091"),
    ("ネパール", "0977"),
    ("スリランカ", "0094"),
    ("バングラデシュ", "0880"),
    ("パキスタン", "0092"),
    ("モンゴル", "0976"),
    // オセアニア
    ("オーストラリア", "0061"),
    ("シドニー", "0061"),
    ("メルボルン", "0061"),
    ("ケアンズ", "0061"),
    ("ニュージーランド", "0064"),
    ("オークランド", "0064"),
    ("グアム", "1002"),
    ("サイパン", "1001"),
    ("フィジー", "0679"),
    ("パラオ", "0680"),
    ("タヒチ", "9689"),
    ("ニューカレドニア", "0687"),
    // ヨーロッパ
    ("ウクライナ", "0380"),
    ("キーウ", "0380"),
    ("イギリス", "0044"),
    ("ロンドン", "0044"),
    ("フランス", "0033"),
    ("パリ", "0033"),
    ("ドイツ", "0049"),
    ("ベルリン", "0049"),
    ("ミュンヘン", "0049"),
    ("イタリア", "0039"),
    ("ローマ", "0039"),
    ("ミラノ", "0039"),
    ("フィレンツェ", "0039"),
    ("ベネチア", "0039"),
    ("スペイン", "0034"),
    ("マドリード", "0034"),
    ("バルセロナ", "0034"),
    ("ポルトガル", "0351"),
    ("リスボン", "0351"),
    ("オランダ", "0031"),
    ("アムステルダム", "0031"),
    ("ベルギー", "0032"),
    ("ブリュッセル", "0032"),
    ("スイス", "0041"),
    ("チューリッヒ", "0041"),
    ("ジュネーブ", "0041"),
    ("オーストリア", "0043"),
    ("ウィーン", "0043"),
    ("チェコ", "0420"),
    ("プラハ", "0420"),
    ("ポーランド", "0048"),
    ("ワルシャワ", "0048"),
    ("クラクフ", "0048"),
    ("ハンガリー", "0036"),
    ("ブダペスト", "0036"),
    ("ギリシャ", "0030"),
    ("アテネ", "0030"),
    ("トルコ", "0090"),
    ("イスタンブール", "0090"),
    ("クロアチア", "0385"),
    ("ドブロブニク", "0385"),
    ("フィンランド", "0358"),
    ("ヘルシンキ", "0358"),
    ("スウェーデン", "0046"),
    ("ストックホルム", "0046"),
    ("ノルウェー", "0047"),
    ("オスロ", "0047"),
    ("デンマーク", "0045"),
    ("コペンハーゲン", "0045"),
    ("アイルランド", "0353"),
    ("ダブリン", "0353"),
    ("アイスランド", "0354"),
    ("ロシア", "9007"),
    ("モスクワ", "9007"),
    // 北米
    ("アメリカ", "1000"),
    ("ニューヨーク", "1000"),
    ("ロサンゼルス", "1000"),
    ("サンフランシスコ", "1000"),
    ("ラスベガス", "1000"),
    ("シアトル", "1000"),
    ("シカゴ", "1000"),
    ("ボストン", "1000"),
    ("マイアミ", "1000"),
    ("ワシントンDC", "1000"),
    ("サンディエゴ", "1000"),
    ("ハワイ", "1808"),
    ("ホノルル", "1808"),
    ("カナダ", "9001"),
    ("バンクーバー", "9001"),
    ("トロント", "9001"),
    ("モントリオール", "9001"),
    // 中南米
    ("メキシコ", "0052"),
    ("カンクン", "0052"),
    ("ブラジル", "0055"),
    ("リオデジャネイロ", "0055"),
    ("サンパウロ", "0055"),
    ("アルゼンチン", "0054"),
    ("ブエノスアイレス", "0054"),
    ("ペルー", "0051"),
    ("リマ", "0051"),
    ("マチュピチュ", "0051"),
    ("チリ", "0056"),
    ("キューバ", "0053"),
    ("ハバナ", "0053"),
    ("コスタリカ", "0506"),
    // 中東
    ("UAE", "0971"),
    ("アラブ首長国連邦", "0971"),
    ("ドバイ", "0971"),
    ("アブダビ", "0971"),
    ("カタール", "0974"),
    ("ドーハ", "0974"),
    ("イスラエル", "0972"),
    ("ヨルダン", "0962"),
    ("オマーン", "0968"),
    ("バーレーン", "0973"),
    ("クウェート", "0965"),
    ("サウジアラビア", "0966"),
    ("イラン", "0098"),
    ("テヘラン", "0098"),
    ("イラク", "0964"),
    ("シリア", "0963"),
    ("レバノン", "0961"),
    ("イエメン", "0967"),
    ("アフガニスタン", "0093"),
    ("パレスチナ", "0970"),
    // アフリカ - 北部
    ("エジプト", "0020"),
    ("カイロ", "0020"),
    ("モロッコ", "0212"),
    ("マラケシュ", "0212"),
    ("アルジェリア", "0213"),
    ("チュニジア", "0216"),
    ("リビア", "0218"),
    ("スーダン", "0249"),
    ("南スーダン", "0211"),
    // アフリカ - 西部
    ("セネガル", "0221"),
    ("ダカール", "0221"),
    ("ガンビア", "0220"),
    ("マリ", "0223"),
    ("ギニア", "0224"),
    ("コートジボワール", "0225"),
    ("ブルキナファソ", "0226"),
    ("ニジェール", "0227"),
    ("トーゴ", "0228"),
    ("ベナン", "0229"),
    ("モーリタニア", "0222"),
    ("リベリア", "0231"),
    ("シエラレオネ", "0232"),
    ("ガーナ", "0233"),
    ("ナイジェリア", "0234"),
    ("ラゴス", "0234"),
    ("カーボベルデ", "0238"),
    ("ギニアビサウ", "0245"),
    // アフリカ - 中部
    ("チャド", "0235"),
    ("中央アフリカ", "0236"),
    ("カメルーン", "0237"),
    ("サントメ・プリンシペ", "0239"),
    ("赤道ギニア", "0240"),
    ("ガボン", "0241"),
    ("コンゴ共和国", "0242"),
    ("コンゴ民主共和国", "0243"),
    ("アンゴラ", "0244"),
    // アフリカ - 東部
    ("エチオピア", "0251"),
    ("アディスアベバ", "0251"),
    ("ソマリア", "0252"),
    ("ジブチ", "0253"),
    ("ケニア", "0254"),
    ("ナイロビ", "0254"),
    ("タンザニア", "0255"),
    ("ダルエスサラーム", "0255"),
    ("ウガンダ", "0256"),
    ("カンパラ", "0256"),
    ("ブルンジ", "0257"),
    ("モザンビーク", "0258"),
    ("ルワンダ", "0250"),
    ("キガリ", "0250"),
    ("セーシェル", "0248"),
    ("エリトリア", "0291"),
    // アフリカ - 南部
    ("南アフリカ", "0027"),
    ("ケープタウン", "0027"),
    ("ヨハネスブルグ", "0027"),
    ("ザンビア", "0260"),
    ("マダガスカル", "0261"),
    ("ジンバブエ", "0263"),
    ("ナミビア", "0264"),
    ("マラウイ", "0265"),
    ("レソト", "0266"),
    ("ボツワナ", "0267"),
    ("エスワティニ", "0268"),
    ("コモロ", "0269"),
    ("モーリシャス", "0230"),
];

/// English country name → feed code, for destinations produced by the
/// upstream AI planning step.
pub static ENGLISH_NAME_TO_COUNTRY_CODE: &[(&str, &str)] = &[
    ("United States", "1000"),
    ("United States of America", "1000"),
    ("USA", "1000"),
    ("America", "1000"),
    ("Hawaii", "1808"),
    ("Canada", "9001"),
    ("Korea", "0082"),
    ("South Korea", "0082"),
    ("Republic of Korea", "0082"),
    ("China", "0086"),
    ("People's Republic of China", "0086"),
    ("Taiwan", "0886"),
    ("Thailand", "0066"),
    ("Vietnam", "0084"),
    ("Viet Nam", "0084"),
    ("Singapore", "0065"),
    ("Malaysia", "0060"),
    ("Indonesia", "0062"),
    ("Philippines", "0063"),
    ("Cambodia", "0855"),
    ("India", "0091"),
    ("Australia", "0061"),
    ("New Zealand", "0064"),
    ("UK", "0044"),
    ("United Kingdom", "0044"),
    ("Great Britain", "0044"),
    ("France", "0033"),
    ("Germany", "0049"),
    ("Italy", "0039"),
    ("Spain", "0034"),
    ("Portugal", "0351"),
    ("Netherlands", "0031"),
    ("Belgium", "0032"),
    ("Switzerland", "0041"),
    ("Austria", "0043"),
    ("Czech Republic", "0420"),
    ("Czechia", "0420"),
    ("Poland", "0048"),
    ("Hungary", "0036"),
    ("Greece", "0030"),
    ("Turkey", "0090"),
    ("Türkiye", "0090"),
    ("Croatia", "0385"),
    ("Finland", "0358"),
    ("Sweden", "0046"),
    ("Norway", "0047"),
    ("Denmark", "0045"),
    ("Ireland", "0353"),
    ("Iceland", "0354"),
    ("Russia", "9007"),
    ("Russian Federation", "9007"),
    ("Ukraine", "0380"),
    ("Mexico", "0052"),
    ("Brazil", "0055"),
    ("Argentina", "0054"),
    ("Peru", "0051"),
    ("Chile", "0056"),
    ("Cuba", "0053"),
    ("Costa Rica", "0506"),
    ("United Arab Emirates", "0971"),
    ("UAE", "0971"),
    ("Qatar", "0974"),
    ("Israel", "0972"),
    ("Jordan", "0962"),
    ("Oman", "0968"),
    ("Bahrain", "0973"),
    ("Kuwait", "0965"),
    ("Saudi Arabia", "0966"),
    ("Egypt", "0020"),
    ("Morocco", "0212"),
    ("South Africa", "0027"),
    ("Kenya", "0254"),
    ("Tanzania", "0255"),
    ("Ethiopia", "0251"),
    ("Ghana", "0233"),
    ("Nigeria", "0234"),
    ("Tunisia", "0216"),
    ("Senegal", "0221"),
    ("Guam", "1002"),
    ("Saipan", "1001"),
    ("Northern Mariana Islands", "1001"),
    ("Fiji", "0679"),
    ("Palau", "0680"),
    ("French Polynesia", "9689"),
    ("Tahiti", "9689"),
    ("New Caledonia", "0687"),
    ("Hong Kong", "0852"),
    ("Macau", "0853"),
    ("Macao", "0853"),
    ("Myanmar", "0095"),
    ("Burma", "0095"),
    ("Laos", "0856"),
    ("Lao People's Democratic Republic", "0856"),
    ("Brunei", "0673"),
    ("Nepal", "0977"),
    ("Sri Lanka", "0094"),
    ("Bangladesh", "0880"),
    ("Pakistan", "0092"),
    ("Mongolia", "0976"),
];

/// Feed code → canonical (Japanese) country name
pub static COUNTRY_CODE_TO_NAME: &[(&str, &str)] = &[
    ("0082", "韓国"),
    ("0086", "中国"),
    ("0852", "香港"),
    ("0853", "マカオ"),
    ("0886", "台湾"),
    ("0066", "タイ"),
    ("0084", "ベトナム"),
    ("0065", "シンガポール"),
    ("0060", "マレーシア"),
    ("0062", "インドネシア"),
    ("0063", "フィリピン"),
    ("0855", "カンボジア"),
    ("0095", "ミャンマー"),
    ("0856", "ラオス"),
    ("0673", "ブルネイ"),
    ("0091", "インド"),
    ("0977", "ネパール"),
    ("0094", "スリランカ"),
    ("0880", "バングラデシュ"),
    ("0092", "パキスタン"),
    ("0976", "モンゴル"),
    ("0061", "オーストラリア"),
    ("0064", "ニュージーランド"),
    ("1002", "グアム"),
    ("1001", "北マリアナ諸島"),
    ("0679", "フィジー"),
    ("0680", "パラオ"),
    ("9689", "タヒチ"),
    ("0687", "ニューカレドニア"),
    ("0044", "イギリス"),
    ("0033", "フランス"),
    ("0049", "ドイツ"),
    ("0039", "イタリア"),
    ("0034", "スペイン"),
    ("0351", "ポルトガル"),
    ("0031", "オランダ"),
    ("0032", "ベルギー"),
    ("0041", "スイス"),
    ("0043", "オーストリア"),
    ("0420", "チェコ"),
    ("0048", "ポーランド"),
    ("0036", "ハンガリー"),
    ("0030", "ギリシャ"),
    ("0090", "トルコ"),
    ("0385", "クロアチア"),
    ("0358", "フィンランド"),
    ("0046", "スウェーデン"),
    ("0047", "ノルウェー"),
    ("0045", "デンマーク"),
    ("0353", "アイルランド"),
    ("0354", "アイスランド"),
    ("9007", "ロシア"),
    ("0380", "ウクライナ"),
    ("1000", "アメリカ"),
    ("1808", "ハワイ"),
    ("9001", "カナダ"),
    ("0052", "メキシコ"),
    ("0055", "ブラジル"),
    ("0054", "アルゼンチン"),
    ("0051", "ペルー"),
    ("0056", "チリ"),
    ("0053", "キューバ"),
    ("0506", "コスタリカ"),
    ("0971", "UAE"),
    ("0974", "カタール"),
    ("0972", "イスラエル"),
    ("0962", "ヨルダン"),
    ("0968", "オマーン"),
    ("0973", "バーレーン"),
    ("0965", "クウェート"),
    ("0966", "サウジアラビア"),
    ("0098", "イラン"),
    ("0964", "イラク"),
    ("0963", "シリア"),
    ("0961", "レバノン"),
    ("0967", "イエメン"),
    ("0093", "アフガニスタン"),
    ("0970", "パレスチナ"),
    ("0020", "エジプト"),
    ("0212", "モロッコ"),
    ("0213", "アルジェリア"),
    ("0218", "リビア"),
    ("0249", "スーダン"),
    ("0211", "南スーダン"),
    ("0027", "南アフリカ"),
    ("0254", "ケニア"),
    ("0255", "タンザニア"),
    ("0256", "ウガンダ"),
    ("0250", "ルワンダ"),
    ("0251", "エチオピア"),
    ("0252", "ソマリア"),
    ("0253", "ジブチ"),
    ("0257", "ブルンジ"),
    ("0258", "モザンビーク"),
    ("0260", "ザンビア"),
    ("0261", "マダガスカル"),
    ("0263", "ジンバブエ"),
    ("0264", "ナミビア"),
    ("0265", "マラウイ"),
    ("0266", "レソト"),
    ("0267", "ボツワナ"),
    ("0268", "エスワティニ"),
    ("0269", "コモロ"),
    ("0291", "エリトリア"),
    ("0248", "セーシェル"),
    ("0230", "モーリシャス"),
    ("0220", "ガンビア"),
    ("0222", "モーリタニア"),
    ("0223", "マリ"),
    ("0224", "ギニア"),
    ("0225", "コートジボワール"),
    ("0226", "ブルキナファソ"),
    ("0227", "ニジェール"),
    ("0228", "トーゴ"),
    ("0229", "ベナン"),
    ("0231", "リベリア"),
    ("0232", "シエラレオネ"),
    ("0233", "ガーナ"),
    ("0235", "チャド"),
    ("0236", "中央アフリカ"),
    ("0237", "カメルーン"),
    ("0238", "カーボベルデ"),
    ("0239", "サントメ・プリンシペ"),
    ("0240", "赤道ギニア"),
    ("0241", "ガボン"),
    ("0242", "コンゴ共和国"),
    ("0243", "コンゴ民主共和国"),
    ("0244", "アンゴラ"),
    ("0245", "ギニアビサウ"),
    ("0216", "チュニジア"),
    ("0221", "セネガル"),
];

static DESTINATION_MAP: Lazy<HashMap<&'static str, CountryCode>> = Lazy::new(|| {
    DESTINATION_TO_COUNTRY_CODE
        .iter()
        .map(|&(name, code)| (name, CountryCode(code)))
        .collect()
});

static ENGLISH_NAME_MAP: Lazy<HashMap<&'static str, CountryCode>> = Lazy::new(|| {
    ENGLISH_NAME_TO_COUNTRY_CODE
        .iter()
        .map(|&(name, code)| (name, CountryCode(code)))
        .collect()
});

static CODE_TO_NAME_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| COUNTRY_CODE_TO_NAME.iter().copied().collect());

/// Exact destination-table lookup
pub fn destination_code(destination: &str) -> Option<CountryCode> {
    DESTINATION_MAP.get(destination).copied()
}

/// Exact English-alias lookup
pub fn english_name_code(name: &str) -> Option<CountryCode> {
    ENGLISH_NAME_MAP.get(name).copied()
}

/// Canonical (Japanese) country name for a feed code
pub fn country_name(code: CountryCode) -> Option<&'static str> {
    CODE_TO_NAME_MAP.get(code.as_str()).copied()
}

/// Representative English name for a feed code, from the alias table
pub fn english_country_name(code: CountryCode) -> Option<&'static str> {
    ENGLISH_NAME_TO_COUNTRY_CODE
        .iter()
        .find(|&&(_, c)| c == code.as_str())
        .map(|&(name, _)| name)
}

/// All destinations with an exact table entry
pub fn supported_destinations() -> impl Iterator<Item = &'static str> {
    DESTINATION_TO_COUNTRY_CODE.iter().map(|&(name, _)| name)
}

/// Ordered destination table as typed codes, for partial matching
pub(crate) fn destination_entries() -> impl Iterator<Item = (&'static str, CountryCode)> {
    DESTINATION_TO_COUNTRY_CODE
        .iter()
        .map(|&(name, code)| (name, CountryCode(code)))
}

fn contacts(entries: &[(&str, &str)]) -> Vec<EmergencyContact> {
    entries
        .iter()
        .map(|&(name, number)| EmergencyContact {
            name: name.to_string(),
            number: number.to_string(),
        })
        .collect()
}

static EMERGENCY_CONTACTS: Lazy<HashMap<&'static str, Vec<EmergencyContact>>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(
        "0066",
        contacts(&[("警察", "191"), ("救急車", "1669"), ("ツーリストポリス", "1155")]),
    );
    map.insert("0063", contacts(&[("警察", "117"), ("救急・消防", "911")]));
    map.insert(
        "0084",
        contacts(&[("警察", "113"), ("救急", "115"), ("消防", "114")]),
    );
    map.insert("0065", contacts(&[("警察", "999"), ("救急・消防", "995")]));
    map.insert(
        "0082",
        contacts(&[("警察", "112"), ("救急・消防", "119"), ("観光案内", "1330")]),
    );
    map.insert(
        "0086",
        contacts(&[("警察", "110"), ("救急", "120"), ("消防", "119")]),
    );
    map.insert("0886", contacts(&[("警察", "110"), ("救急・消防", "119")]));
    map.insert("1000", contacts(&[("緊急通報（警察・消防・救急）", "911")]));
    map.insert("1808", contacts(&[("緊急通報（警察・消防・救急）", "911")]));
    map.insert("1002", contacts(&[("緊急通報（警察・消防・救急）", "911")]));
    map.insert("1001", contacts(&[("緊急通報（警察・消防・救急）", "911")]));
    map.insert("9001", contacts(&[("緊急通報（警察・消防・救急）", "911")]));
    map.insert(
        "0044",
        contacts(&[("緊急通報（警察・消防・救急）", "999"), ("EU緊急通報", "112")]),
    );
    map.insert(
        "0033",
        contacts(&[
            ("警察", "17"),
            ("救急", "15"),
            ("消防", "18"),
            ("EU緊急通報", "112"),
        ]),
    );
    map.insert("0049", contacts(&[("警察", "110"), ("救急・消防", "112")]));
    map.insert(
        "0039",
        contacts(&[
            ("警察", "113"),
            ("救急", "118"),
            ("消防", "115"),
            ("EU緊急通報", "112"),
        ]),
    );
    map.insert("0061", contacts(&[("緊急通報（警察・消防・救急）", "000")]));
    map
});

fn embassy(name: &str, address: &str, phone: &str) -> Embassy {
    Embassy {
        name: name.to_string(),
        address: address.to_string(),
        phone: phone.to_string(),
    }
}

static EMBASSIES: Lazy<HashMap<&'static str, Embassy>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(
        "0066",
        embassy(
            "在タイ日本国大使館",
            "177 Witthayu Road, Lumphini, Pathum Wan, Bangkok 10330",
            "+66-2-207-8500",
        ),
    );
    map.insert(
        "0063",
        embassy(
            "在フィリピン日本国大使館",
            "2627 Roxas Boulevard, Pasay City, Metro Manila",
            "+63-2-8551-5710",
        ),
    );
    map.insert(
        "0084",
        embassy(
            "在ベトナム日本国大使館",
            "27 Lieu Giai, Ba Dinh, Hanoi",
            "+84-24-3846-3000",
        ),
    );
    map.insert(
        "0065",
        embassy(
            "在シンガポール日本国大使館",
            "16 Nassim Road, Singapore 258390",
            "+65-6235-8855",
        ),
    );
    map.insert(
        "0082",
        embassy(
            "在大韓民国日本国大使館",
            "22-gil 6, Yulgok-ro, Jongno-gu, Seoul",
            "+82-2-2170-5200",
        ),
    );
    map.insert(
        "0086",
        embassy(
            "在中華人民共和国日本国大使館",
            "1 Liangmaqiao Dongjie, Chaoyang District, Beijing 100600",
            "+86-10-8531-9800",
        ),
    );
    map.insert(
        "1000",
        embassy(
            "在アメリカ合衆国日本国大使館",
            "2520 Massachusetts Avenue, N.W., Washington, D.C. 20008",
            "+1-202-238-6700",
        ),
    );
    map.insert(
        "1808",
        embassy(
            "在ホノルル日本国総領事館",
            "1742 Nuuanu Avenue, Honolulu, HI 96817",
            "+1-808-543-3111",
        ),
    );
    map.insert(
        "1002",
        embassy(
            "在ハガッニャ日本国総領事館",
            "Suite 604, ITC Building, 590 South Marine Corps Drive, Tamuning, Guam 96913",
            "+1-671-646-1290",
        ),
    );
    map.insert(
        "9001",
        embassy(
            "在カナダ日本国大使館",
            "255 Sussex Drive, Ottawa, Ontario K1N 9E6",
            "+1-613-241-8541",
        ),
    );
    map.insert(
        "0044",
        embassy(
            "在英国日本国大使館",
            "101-104 Piccadilly, London W1J 7JT",
            "+44-20-7465-6500",
        ),
    );
    map.insert(
        "0033",
        embassy(
            "在フランス日本国大使館",
            "7 Avenue Hoche, 75008 Paris",
            "+33-1-48-88-62-00",
        ),
    );
    map
});

/// Emergency numbers for a country, when known
pub fn emergency_contacts(code: CountryCode) -> Option<&'static Vec<EmergencyContact>> {
    EMERGENCY_CONTACTS.get(code.as_str())
}

/// Japanese embassy or consulate for a country, when known
pub fn embassy_for(code: CountryCode) -> Option<&'static Embassy> {
    EMBASSIES.get(code.as_str())
}
