pub const SIGN_ENGLISH_INSTRUCTION: &str = "Remember: You just have to answer in concise manner with no extra thought.\nConvert the following plain English sentence to sign English:";

pub fn build_sign_prompt(text: &str) -> String {
    format!("{}\n{}", SIGN_ENGLISH_INSTRUCTION, text)
}
