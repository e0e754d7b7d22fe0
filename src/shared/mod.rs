pub mod kana;
