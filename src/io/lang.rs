//! Static localization table for UI-facing labels.
//!
//! The render core never consumes these strings; rendering inputs are
//! always enum/index values. Lookups fall back to English, then to the key
//! itself, so a missing translation can never panic or block the UI.

/// Supported UI languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Japanese.
    Ja,
}

struct Entry {
    key: &'static str,
    en: &'static str,
    ja: &'static str,
}

const TABLE: &[Entry] = &[
    Entry { key: "species", en: "Species", ja: "種族" },
    Entry { key: "species.human", en: "Human", ja: "人間" },
    Entry { key: "species.slime", en: "Slime", ja: "スライム" },
    Entry { key: "species.skeleton", en: "Skeleton", ja: "スケルトン" },
    Entry { key: "species.ghost", en: "Ghost", ja: "ゴースト" },
    Entry { key: "species.goblin", en: "Goblin", ja: "ゴブリン" },
    Entry { key: "species.lizardman", en: "Lizardman", ja: "リザードマン" },
    Entry { key: "species.birdman", en: "Birdman", ja: "バードマン" },
    Entry { key: "species.demon", en: "Demon", ja: "デーモン" },
    Entry { key: "species.elf", en: "Elf", ja: "エルフ" },
    Entry { key: "species.dwarf", en: "Dwarf", ja: "ドワーフ" },
    Entry { key: "slot.skin", en: "Skin", ja: "肌" },
    Entry { key: "slot.face", en: "Face Shape", ja: "輪郭" },
    Entry { key: "slot.hair", en: "Hair", ja: "髪型" },
    Entry { key: "slot.eyes", en: "Eyes", ja: "目" },
    Entry { key: "slot.chest", en: "Top", ja: "トップス" },
    Entry { key: "slot.waist", en: "Bottom", ja: "ボトムス" },
    Entry { key: "slot.legs", en: "Legs", ja: "脚" },
    Entry { key: "slot.shoes", en: "Shoes", ja: "靴" },
    Entry { key: "slot.accessory", en: "Accessory", ja: "アクセサリー" },
    Entry { key: "slot.eye_accessory", en: "Eyewear", ja: "アイウェア" },
    Entry { key: "slot.ear_accessory", en: "Earring", ja: "イヤリング" },
    Entry { key: "slot.horns", en: "Horns", ja: "角" },
    Entry { key: "slot.wings", en: "Wings", ja: "翼" },
    Entry { key: "slot.tail", en: "Tail", ja: "尻尾" },
    Entry { key: "slot.helmet", en: "Helmet", ja: "兜" },
    Entry { key: "slot.weapon", en: "Weapon", ja: "武器" },
    Entry { key: "slot.shield", en: "Shield", ja: "盾" },
    Entry { key: "slot.fangs", en: "Fangs", ja: "牙" },
    Entry { key: "slot.claws", en: "Claws", ja: "爪" },
    Entry { key: "tier.flat", en: "8-bit", ja: "8ビット" },
    Entry { key: "tier.dithered", en: "16-bit", ja: "16ビット" },
    Entry { key: "tier.gradient", en: "32-bit", ja: "32ビット" },
    Entry { key: "direction.front", en: "Front", ja: "正面" },
    Entry { key: "direction.left", en: "Left", ja: "左" },
    Entry { key: "direction.right", en: "Right", ja: "右" },
    Entry { key: "direction.back", en: "Back", ja: "背面" },
    Entry { key: "action.randomize", en: "Randomize", ja: "ランダム生成" },
    Entry { key: "action.export", en: "Export PNG", ja: "PNG出力" },
    Entry { key: "action.save", en: "Save", ja: "保存" },
    Entry { key: "action.load", en: "Load", ja: "読み込み" },
];

/// Look up a UI label. Unknown keys echo back the key itself.
pub fn label(lang: Language, key: &str) -> &str {
    match TABLE.iter().find(|e| e.key == key) {
        Some(e) => match lang {
            Language::En => e.en,
            Language::Ja => e.ja,
        },
        None => key,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/lang.rs"]
mod tests;
