//! Classifier vocabulary to commerce search term mapping.
//!
//! Keys are in normalized form: lowercase, words joined by `_`. The key set
//! follows the ImageNet label set used by the mobile classifier; swapping the
//! classifier means re-curating this table and bumping the version.

pub const LABEL_TABLE_VERSION: &str = "imagenet-fr-2";

pub const BACKPACK: &str = "sac a dos";
pub const HANDBAG: &str = "sac a main";
pub const BAG: &str = "sac";
pub const WALLET: &str = "portefeuille";
pub const SHOES: &str = "chaussures";
pub const BOOTS: &str = "bottes";
pub const SANDALS: &str = "sandales";
pub const WATCH: &str = "montre";
pub const SUNGLASSES: &str = "lunettes de soleil";
pub const GLASSES: &str = "lunettes";
pub const JEWELRY: &str = "bijoux";
pub const PERFUME: &str = "parfum";
pub const CLOTHING: &str = "vetements";
pub const DRESS: &str = "robe";
pub const JEANS: &str = "jean";
pub const HAT: &str = "chapeau";
pub const BELT: &str = "ceinture";
pub const SCARF: &str = "echarpe";
pub const GLOVES: &str = "gants";
pub const UMBRELLA: &str = "parapluie";

pub static LABEL_TABLE: &[(&str, &str)] = &[
    // bags
    ("backpack", BACKPACK),
    ("knapsack", BACKPACK),
    ("packsack", BACKPACK),
    ("rucksack", BACKPACK),
    ("haversack", BACKPACK),
    ("purse", HANDBAG),
    ("handbag", HANDBAG),
    ("tote", HANDBAG),
    ("tote_bag", HANDBAG),
    ("clutch", HANDBAG),
    ("bag", BAG),
    ("mailbag", BAG),
    ("postbag", BAG),
    ("plastic_bag", BAG),
    ("shopping_bag", BAG),
    ("duffel", BAG),
    ("suitcase", BAG),
    // wallets
    ("wallet", WALLET),
    ("billfold", WALLET),
    ("notecase", WALLET),
    ("pocketbook", WALLET),
    // shoes
    ("shoe", SHOES),
    ("shoes", SHOES),
    ("sneaker", SHOES),
    ("running_shoe", SHOES),
    ("loafer", SHOES),
    ("oxford", SHOES),
    ("clog", SHOES),
    ("geta", SHOES),
    ("patten", SHOES),
    ("sabot", SHOES),
    ("moccasin", SHOES),
    ("cowboy_boot", BOOTS),
    ("boot", BOOTS),
    ("sandal", SANDALS),
    ("flip-flop", SANDALS),
    // watches
    ("watch", WATCH),
    ("wristwatch", WATCH),
    ("digital_watch", WATCH),
    ("analog_watch", WATCH),
    ("stopwatch", WATCH),
    // eyewear
    ("sunglasses", SUNGLASSES),
    ("sunglass", SUNGLASSES),
    ("dark_glasses", SUNGLASSES),
    ("shades", SUNGLASSES),
    ("spectacles", GLASSES),
    ("specs", GLASSES),
    ("eyeglasses", GLASSES),
    ("glasses", GLASSES),
    // jewelry
    ("necklace", JEWELRY),
    ("bracelet", JEWELRY),
    ("earring", JEWELRY),
    ("locket", JEWELRY),
    ("pendant", JEWELRY),
    ("ring", JEWELRY),
    ("brooch", JEWELRY),
    // perfume
    ("perfume", PERFUME),
    ("essence", PERFUME),
    ("cologne", PERFUME),
    ("atomizer", PERFUME),
    ("atomiser", PERFUME),
    ("lotion", PERFUME),
    // clothing
    ("jersey", CLOTHING),
    ("t-shirt", CLOTHING),
    ("tee_shirt", CLOTHING),
    ("sweatshirt", CLOTHING),
    ("cardigan", CLOTHING),
    ("suit", CLOTHING),
    ("trench_coat", CLOTHING),
    ("fur_coat", CLOTHING),
    ("coat", CLOTHING),
    ("jacket", CLOTHING),
    ("kimono", CLOTHING),
    ("abaya", CLOTHING),
    ("poncho", CLOTHING),
    ("pajama", CLOTHING),
    ("pyjama", CLOTHING),
    ("vest", CLOTHING),
    ("shirt", CLOTHING),
    ("gown", DRESS),
    ("dress", DRESS),
    ("overskirt", DRESS),
    ("hoopskirt", DRESS),
    ("miniskirt", DRESS),
    ("jean", JEANS),
    ("jeans", JEANS),
    ("blue_jean", JEANS),
    ("denim", JEANS),
    // headwear
    ("hat", HAT),
    ("cowboy_hat", HAT),
    ("sombrero", HAT),
    ("bonnet", HAT),
    ("cap", HAT),
    ("beanie", HAT),
    ("mortarboard", HAT),
    // belts
    ("belt", BELT),
    ("buckle", BELT),
    // accessories
    ("stole", SCARF),
    ("scarf", SCARF),
    ("shawl", SCARF),
    ("mitten", GLOVES),
    ("glove", GLOVES),
    ("umbrella", UMBRELLA),
];
