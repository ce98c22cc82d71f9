//! Key names used in keybindings and the X keysyms they stand for.
//!
//! Names are the ones from `X11/keysymdef.h` and `X11/XF86keysym.h` without their `XK_` prefix,
//! so `"bracketleft"`, `"Page_Up"` and `"XF86AudioMute"` all resolve.
use x11_dl::keysym;

pub type XKeysym = u32;

/// Resolve a key name such as `"q"`, `"Return"` or `"XF86AudioMute"` into its keysym.
///
/// A single upper-case letter resolves to the lower-case keysym, which is what a key press
/// without Shift reports.
#[must_use]
pub fn into_keysym(key: &str) -> Option<XKeysym> {
    match key {
        "Enter" => return Some(keysym::XK_Return),
        "Space" => return Some(keysym::XK_space),
        _ => {}
    }
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_uppercase() {
            return Some(XKeysym::from(c.to_ascii_lowercase()));
        }
    }
    lookup(key)
}

#[allow(clippy::too_many_lines)]
fn lookup(key: &str) -> Option<XKeysym> {
    let sym = match key {
        "BackSpace" => keysym::XK_BackSpace,
        "Tab" => keysym::XK_Tab,
        "Linefeed" => keysym::XK_Linefeed,
        "Clear" => keysym::XK_Clear,
        "Return" => keysym::XK_Return,
        "Pause" => keysym::XK_Pause,
        "Scroll_Lock" => keysym::XK_Scroll_Lock,
        "Sys_Req" => keysym::XK_Sys_Req,
        "Escape" => keysym::XK_Escape,
        "Delete" => keysym::XK_Delete,
        "Multi_key" => keysym::XK_Multi_key,
        "Kanji" => keysym::XK_Kanji,
        "Muhenkan" => keysym::XK_Muhenkan,
        "Henkan_Mode" => keysym::XK_Henkan_Mode,
        "Henkan" => keysym::XK_Henkan,
        "Romaji" => keysym::XK_Romaji,
        "Hiragana" => keysym::XK_Hiragana,
        "Katakana" => keysym::XK_Katakana,
        "Hiragana_Katakana" => keysym::XK_Hiragana_Katakana,
        "Zenkaku" => keysym::XK_Zenkaku,
        "Hankaku" => keysym::XK_Hankaku,
        "Zenkaku_Hankaku" => keysym::XK_Zenkaku_Hankaku,
        "Touroku" => keysym::XK_Touroku,
        "Massyo" => keysym::XK_Massyo,
        "Kana_Lock" => keysym::XK_Kana_Lock,
        "Kana_Shift" => keysym::XK_Kana_Shift,
        "Eisu_Shift" => keysym::XK_Eisu_Shift,
        "Eisu_toggle" => keysym::XK_Eisu_toggle,
        "Home" => keysym::XK_Home,
        "Left" => keysym::XK_Left,
        "Up" => keysym::XK_Up,
        "Right" => keysym::XK_Right,
        "Down" => keysym::XK_Down,
        "Prior" => keysym::XK_Prior,
        "Page_Up" => keysym::XK_Page_Up,
        "Next" => keysym::XK_Next,
        "Page_Down" => keysym::XK_Page_Down,
        "End" => keysym::XK_End,
        "Begin" => keysym::XK_Begin,
        "Win_L" => keysym::XK_Win_L,
        "Win_R" => keysym::XK_Win_R,
        "App" => keysym::XK_App,
        "Select" => keysym::XK_Select,
        "Print" => keysym::XK_Print,
        "Execute" => keysym::XK_Execute,
        "Insert" => keysym::XK_Insert,
        "Undo" => keysym::XK_Undo,
        "Redo" => keysym::XK_Redo,
        "Menu" => keysym::XK_Menu,
        "Find" => keysym::XK_Find,
        "Cancel" => keysym::XK_Cancel,
        "Help" => keysym::XK_Help,
        "Break" => keysym::XK_Break,
        "Mode_switch" => keysym::XK_Mode_switch,
        "script_switch" => keysym::XK_script_switch,
        "Num_Lock" => keysym::XK_Num_Lock,
        "KP_Space" => keysym::XK_KP_Space,
        "KP_Tab" => keysym::XK_KP_Tab,
        "KP_Enter" => keysym::XK_KP_Enter,
        "KP_F1" => keysym::XK_KP_F1,
        "KP_F2" => keysym::XK_KP_F2,
        "KP_F3" => keysym::XK_KP_F3,
        "KP_F4" => keysym::XK_KP_F4,
        "KP_Home" => keysym::XK_KP_Home,
        "KP_Left" => keysym::XK_KP_Left,
        "KP_Up" => keysym::XK_KP_Up,
        "KP_Right" => keysym::XK_KP_Right,
        "KP_Down" => keysym::XK_KP_Down,
        "KP_Prior" => keysym::XK_KP_Prior,
        "KP_Page_Up" => keysym::XK_KP_Page_Up,
        "KP_Next" => keysym::XK_KP_Next,
        "KP_Page_Down" => keysym::XK_KP_Page_Down,
        "KP_End" => keysym::XK_KP_End,
        "KP_Begin" => keysym::XK_KP_Begin,
        "KP_Insert" => keysym::XK_KP_Insert,
        "KP_Delete" => keysym::XK_KP_Delete,
        "KP_Equal" => keysym::XK_KP_Equal,
        "KP_Multiply" => keysym::XK_KP_Multiply,
        "KP_Add" => keysym::XK_KP_Add,
        "KP_Separator" => keysym::XK_KP_Separator,
        "KP_Subtract" => keysym::XK_KP_Subtract,
        "KP_Decimal" => keysym::XK_KP_Decimal,
        "KP_Divide" => keysym::XK_KP_Divide,
        "KP_0" => keysym::XK_KP_0,
        "KP_1" => keysym::XK_KP_1,
        "KP_2" => keysym::XK_KP_2,
        "KP_3" => keysym::XK_KP_3,
        "KP_4" => keysym::XK_KP_4,
        "KP_5" => keysym::XK_KP_5,
        "KP_6" => keysym::XK_KP_6,
        "KP_7" => keysym::XK_KP_7,
        "KP_8" => keysym::XK_KP_8,
        "KP_9" => keysym::XK_KP_9,
        "F1" => keysym::XK_F1,
        "F2" => keysym::XK_F2,
        "F3" => keysym::XK_F3,
        "F4" => keysym::XK_F4,
        "F5" => keysym::XK_F5,
        "F6" => keysym::XK_F6,
        "F7" => keysym::XK_F7,
        "F8" => keysym::XK_F8,
        "F9" => keysym::XK_F9,
        "F10" => keysym::XK_F10,
        "F11" => keysym::XK_F11,
        "L1" => keysym::XK_L1,
        "F12" => keysym::XK_F12,
        "L2" => keysym::XK_L2,
        "F13" => keysym::XK_F13,
        "L3" => keysym::XK_L3,
        "F14" => keysym::XK_F14,
        "L4" => keysym::XK_L4,
        "F15" => keysym::XK_F15,
        "L5" => keysym::XK_L5,
        "F16" => keysym::XK_F16,
        "L6" => keysym::XK_L6,
        "F17" => keysym::XK_F17,
        "L7" => keysym::XK_L7,
        "F18" => keysym::XK_F18,
        "L8" => keysym::XK_L8,
        "F19" => keysym::XK_F19,
        "L9" => keysym::XK_L9,
        "F20" => keysym::XK_F20,
        "L10" => keysym::XK_L10,
        "F21" => keysym::XK_F21,
        "R1" => keysym::XK_R1,
        "F22" => keysym::XK_F22,
        "R2" => keysym::XK_R2,
        "F23" => keysym::XK_F23,
        "R3" => keysym::XK_R3,
        "F24" => keysym::XK_F24,
        "R4" => keysym::XK_R4,
        "F25" => keysym::XK_F25,
        "R5" => keysym::XK_R5,
        "F26" => keysym::XK_F26,
        "R6" => keysym::XK_R6,
        "F27" => keysym::XK_F27,
        "R7" => keysym::XK_R7,
        "F28" => keysym::XK_F28,
        "R8" => keysym::XK_R8,
        "F29" => keysym::XK_F29,
        "R9" => keysym::XK_R9,
        "F30" => keysym::XK_F30,
        "R10" => keysym::XK_R10,
        "F31" => keysym::XK_F31,
        "R11" => keysym::XK_R11,
        "F32" => keysym::XK_F32,
        "R12" => keysym::XK_R12,
        "F33" => keysym::XK_F33,
        "R13" => keysym::XK_R13,
        "F34" => keysym::XK_F34,
        "R14" => keysym::XK_R14,
        "F35" => keysym::XK_F35,
        "R15" => keysym::XK_R15,
        "Shift_L" => keysym::XK_Shift_L,
        "Shift_R" => keysym::XK_Shift_R,
        "Control_L" => keysym::XK_Control_L,
        "Control_R" => keysym::XK_Control_R,
        "Caps_Lock" => keysym::XK_Caps_Lock,
        "Shift_Lock" => keysym::XK_Shift_Lock,
        "Meta_L" => keysym::XK_Meta_L,
        "Meta_R" => keysym::XK_Meta_R,
        "Alt_L" => keysym::XK_Alt_L,
        "Alt_R" => keysym::XK_Alt_R,
        "Super_L" => keysym::XK_Super_L,
        "Super_R" => keysym::XK_Super_R,
        "Hyper_L" => keysym::XK_Hyper_L,
        "Hyper_R" => keysym::XK_Hyper_R,
        "space" => keysym::XK_space,
        "exclam" => keysym::XK_exclam,
        "quotedbl" => keysym::XK_quotedbl,
        "numbersign" => keysym::XK_numbersign,
        "dollar" => keysym::XK_dollar,
        "percent" => keysym::XK_percent,
        "ampersand" => keysym::XK_ampersand,
        "apostrophe" => keysym::XK_apostrophe,
        "quoteright" => keysym::XK_quoteright,
        "parenleft" => keysym::XK_parenleft,
        "parenright" => keysym::XK_parenright,
        "asterisk" => keysym::XK_asterisk,
        "plus" => keysym::XK_plus,
        "comma" => keysym::XK_comma,
        "minus" => keysym::XK_minus,
        "period" => keysym::XK_period,
        "slash" => keysym::XK_slash,
        "0" => keysym::XK_0,
        "1" => keysym::XK_1,
        "2" => keysym::XK_2,
        "3" => keysym::XK_3,
        "4" => keysym::XK_4,
        "5" => keysym::XK_5,
        "6" => keysym::XK_6,
        "7" => keysym::XK_7,
        "8" => keysym::XK_8,
        "9" => keysym::XK_9,
        "colon" => keysym::XK_colon,
        "semicolon" => keysym::XK_semicolon,
        "less" => keysym::XK_less,
        "equal" => keysym::XK_equal,
        "greater" => keysym::XK_greater,
        "question" => keysym::XK_question,
        "at" => keysym::XK_at,
        "A" => keysym::XK_A,
        "B" => keysym::XK_B,
        "C" => keysym::XK_C,
        "D" => keysym::XK_D,
        "E" => keysym::XK_E,
        "F" => keysym::XK_F,
        "G" => keysym::XK_G,
        "H" => keysym::XK_H,
        "I" => keysym::XK_I,
        "J" => keysym::XK_J,
        "K" => keysym::XK_K,
        "L" => keysym::XK_L,
        "M" => keysym::XK_M,
        "N" => keysym::XK_N,
        "O" => keysym::XK_O,
        "P" => keysym::XK_P,
        "Q" => keysym::XK_Q,
        "R" => keysym::XK_R,
        "S" => keysym::XK_S,
        "T" => keysym::XK_T,
        "U" => keysym::XK_U,
        "V" => keysym::XK_V,
        "W" => keysym::XK_W,
        "X" => keysym::XK_X,
        "Y" => keysym::XK_Y,
        "Z" => keysym::XK_Z,
        "bracketleft" => keysym::XK_bracketleft,
        "backslash" => keysym::XK_backslash,
        "bracketright" => keysym::XK_bracketright,
        "asciicircum" => keysym::XK_asciicircum,
        "underscore" => keysym::XK_underscore,
        "grave" => keysym::XK_grave,
        "quoteleft" => keysym::XK_quoteleft,
        "a" => keysym::XK_a,
        "b" => keysym::XK_b,
        "c" => keysym::XK_c,
        "d" => keysym::XK_d,
        "e" => keysym::XK_e,
        "f" => keysym::XK_f,
        "g" => keysym::XK_g,
        "h" => keysym::XK_h,
        "i" => keysym::XK_i,
        "j" => keysym::XK_j,
        "k" => keysym::XK_k,
        "l" => keysym::XK_l,
        "m" => keysym::XK_m,
        "n" => keysym::XK_n,
        "o" => keysym::XK_o,
        "p" => keysym::XK_p,
        "q" => keysym::XK_q,
        "r" => keysym::XK_r,
        "s" => keysym::XK_s,
        "t" => keysym::XK_t,
        "u" => keysym::XK_u,
        "v" => keysym::XK_v,
        "w" => keysym::XK_w,
        "x" => keysym::XK_x,
        "y" => keysym::XK_y,
        "z" => keysym::XK_z,
        "braceleft" => keysym::XK_braceleft,
        "bar" => keysym::XK_bar,
        "braceright" => keysym::XK_braceright,
        "asciitilde" => keysym::XK_asciitilde,
        "nobreakspace" => keysym::XK_nobreakspace,
        "exclamdown" => keysym::XK_exclamdown,
        "cent" => keysym::XK_cent,
        "sterling" => keysym::XK_sterling,
        "currency" => keysym::XK_currency,
        "yen" => keysym::XK_yen,
        "brokenbar" => keysym::XK_brokenbar,
        "section" => keysym::XK_section,
        "diaeresis" => keysym::XK_diaeresis,
        "copyright" => keysym::XK_copyright,
        "ordfeminine" => keysym::XK_ordfeminine,
        "guillemotleft" => keysym::XK_guillemotleft,
        "notsign" => keysym::XK_notsign,
        "hyphen" => keysym::XK_hyphen,
        "registered" => keysym::XK_registered,
        "macron" => keysym::XK_macron,
        "degree" => keysym::XK_degree,
        "plusminus" => keysym::XK_plusminus,
        "twosuperior" => keysym::XK_twosuperior,
        "threesuperior" => keysym::XK_threesuperior,
        "acute" => keysym::XK_acute,
        "mu" => keysym::XK_mu,
        "paragraph" => keysym::XK_paragraph,
        "periodcentered" => keysym::XK_periodcentered,
        "cedilla" => keysym::XK_cedilla,
        "onesuperior" => keysym::XK_onesuperior,
        "masculine" => keysym::XK_masculine,
        "guillemotright" => keysym::XK_guillemotright,
        "onequarter" => keysym::XK_onequarter,
        "onehalf" => keysym::XK_onehalf,
        "threequarters" => keysym::XK_threequarters,
        "questiondown" => keysym::XK_questiondown,
        "Agrave" => keysym::XK_Agrave,
        "Aacute" => keysym::XK_Aacute,
        "Acircumflex" => keysym::XK_Acircumflex,
        "Atilde" => keysym::XK_Atilde,
        "Adiaeresis" => keysym::XK_Adiaeresis,
        "Aring" => keysym::XK_Aring,
        "AE" => keysym::XK_AE,
        "Ccedilla" => keysym::XK_Ccedilla,
        "Egrave" => keysym::XK_Egrave,
        "Eacute" => keysym::XK_Eacute,
        "Ecircumflex" => keysym::XK_Ecircumflex,
        "Ediaeresis" => keysym::XK_Ediaeresis,
        "Igrave" => keysym::XK_Igrave,
        "Iacute" => keysym::XK_Iacute,
        "Icircumflex" => keysym::XK_Icircumflex,
        "Idiaeresis" => keysym::XK_Idiaeresis,
        "ETH" => keysym::XK_ETH,
        "Eth" => keysym::XK_Eth,
        "Ntilde" => keysym::XK_Ntilde,
        "Ograve" => keysym::XK_Ograve,
        "Oacute" => keysym::XK_Oacute,
        "Ocircumflex" => keysym::XK_Ocircumflex,
        "Otilde" => keysym::XK_Otilde,
        "Odiaeresis" => keysym::XK_Odiaeresis,
        "multiply" => keysym::XK_multiply,
        "Ooblique" => keysym::XK_Ooblique,
        "Ugrave" => keysym::XK_Ugrave,
        "Uacute" => keysym::XK_Uacute,
        "Ucircumflex" => keysym::XK_Ucircumflex,
        "Udiaeresis" => keysym::XK_Udiaeresis,
        "Yacute" => keysym::XK_Yacute,
        "THORN" => keysym::XK_THORN,
        "Thorn" => keysym::XK_Thorn,
        "ssharp" => keysym::XK_ssharp,
        "agrave" => keysym::XK_agrave,
        "aacute" => keysym::XK_aacute,
        "acircumflex" => keysym::XK_acircumflex,
        "atilde" => keysym::XK_atilde,
        "adiaeresis" => keysym::XK_adiaeresis,
        "aring" => keysym::XK_aring,
        "ae" => keysym::XK_ae,
        "ccedilla" => keysym::XK_ccedilla,
        "egrave" => keysym::XK_egrave,
        "eacute" => keysym::XK_eacute,
        "ecircumflex" => keysym::XK_ecircumflex,
        "ediaeresis" => keysym::XK_ediaeresis,
        "igrave" => keysym::XK_igrave,
        "iacute" => keysym::XK_iacute,
        "icircumflex" => keysym::XK_icircumflex,
        "idiaeresis" => keysym::XK_idiaeresis,
        "eth" => keysym::XK_eth,
        "ntilde" => keysym::XK_ntilde,
        "ograve" => keysym::XK_ograve,
        "oacute" => keysym::XK_oacute,
        "ocircumflex" => keysym::XK_ocircumflex,
        "otilde" => keysym::XK_otilde,
        "odiaeresis" => keysym::XK_odiaeresis,
        "division" => keysym::XK_division,
        "oslash" => keysym::XK_oslash,
        "ugrave" => keysym::XK_ugrave,
        "uacute" => keysym::XK_uacute,
        "ucircumflex" => keysym::XK_ucircumflex,
        "udiaeresis" => keysym::XK_udiaeresis,
        "yacute" => keysym::XK_yacute,
        "thorn" => keysym::XK_thorn,
        "ydiaeresis" => keysym::XK_ydiaeresis,
        "Aogonek" => keysym::XK_Aogonek,
        "breve" => keysym::XK_breve,
        "Lstroke" => keysym::XK_Lstroke,
        "Lcaron" => keysym::XK_Lcaron,
        "Sacute" => keysym::XK_Sacute,
        "Scaron" => keysym::XK_Scaron,
        "Scedilla" => keysym::XK_Scedilla,
        "Tcaron" => keysym::XK_Tcaron,
        "Zacute" => keysym::XK_Zacute,
        "Zcaron" => keysym::XK_Zcaron,
        "Zabovedot" => keysym::XK_Zabovedot,
        "aogonek" => keysym::XK_aogonek,
        "ogonek" => keysym::XK_ogonek,
        "lstroke" => keysym::XK_lstroke,
        "lcaron" => keysym::XK_lcaron,
        "sacute" => keysym::XK_sacute,
        "caron" => keysym::XK_caron,
        "scaron" => keysym::XK_scaron,
        "scedilla" => keysym::XK_scedilla,
        "tcaron" => keysym::XK_tcaron,
        "zacute" => keysym::XK_zacute,
        "doubleacute" => keysym::XK_doubleacute,
        "zcaron" => keysym::XK_zcaron,
        "zabovedot" => keysym::XK_zabovedot,
        "Racute" => keysym::XK_Racute,
        "Abreve" => keysym::XK_Abreve,
        "Lacute" => keysym::XK_Lacute,
        "Cacute" => keysym::XK_Cacute,
        "Ccaron" => keysym::XK_Ccaron,
        "Eogonek" => keysym::XK_Eogonek,
        "Ecaron" => keysym::XK_Ecaron,
        "Dcaron" => keysym::XK_Dcaron,
        "Dstroke" => keysym::XK_Dstroke,
        "Nacute" => keysym::XK_Nacute,
        "Ncaron" => keysym::XK_Ncaron,
        "Odoubleacute" => keysym::XK_Odoubleacute,
        "Rcaron" => keysym::XK_Rcaron,
        "Uring" => keysym::XK_Uring,
        "Udoubleacute" => keysym::XK_Udoubleacute,
        "Tcedilla" => keysym::XK_Tcedilla,
        "racute" => keysym::XK_racute,
        "abreve" => keysym::XK_abreve,
        "lacute" => keysym::XK_lacute,
        "cacute" => keysym::XK_cacute,
        "ccaron" => keysym::XK_ccaron,
        "eogonek" => keysym::XK_eogonek,
        "ecaron" => keysym::XK_ecaron,
        "dcaron" => keysym::XK_dcaron,
        "dstroke" => keysym::XK_dstroke,
        "nacute" => keysym::XK_nacute,
        "ncaron" => keysym::XK_ncaron,
        "odoubleacute" => keysym::XK_odoubleacute,
        "udoubleacute" => keysym::XK_udoubleacute,
        "rcaron" => keysym::XK_rcaron,
        "uring" => keysym::XK_uring,
        "tcedilla" => keysym::XK_tcedilla,
        "abovedot" => keysym::XK_abovedot,
        "Hstroke" => keysym::XK_Hstroke,
        "Hcircumflex" => keysym::XK_Hcircumflex,
        "Iabovedot" => keysym::XK_Iabovedot,
        "Gbreve" => keysym::XK_Gbreve,
        "Jcircumflex" => keysym::XK_Jcircumflex,
        "hstroke" => keysym::XK_hstroke,
        "hcircumflex" => keysym::XK_hcircumflex,
        "idotless" => keysym::XK_idotless,
        "gbreve" => keysym::XK_gbreve,
        "jcircumflex" => keysym::XK_jcircumflex,
        "Cabovedot" => keysym::XK_Cabovedot,
        "Ccircumflex" => keysym::XK_Ccircumflex,
        "Gabovedot" => keysym::XK_Gabovedot,
        "Gcircumflex" => keysym::XK_Gcircumflex,
        "Ubreve" => keysym::XK_Ubreve,
        "Scircumflex" => keysym::XK_Scircumflex,
        "cabovedot" => keysym::XK_cabovedot,
        "ccircumflex" => keysym::XK_ccircumflex,
        "gabovedot" => keysym::XK_gabovedot,
        "gcircumflex" => keysym::XK_gcircumflex,
        "ubreve" => keysym::XK_ubreve,
        "scircumflex" => keysym::XK_scircumflex,
        "kra" => keysym::XK_kra,
        "kappa" => keysym::XK_kappa,
        "Rcedilla" => keysym::XK_Rcedilla,
        "Itilde" => keysym::XK_Itilde,
        "Lcedilla" => keysym::XK_Lcedilla,
        "Emacron" => keysym::XK_Emacron,
        "Gcedilla" => keysym::XK_Gcedilla,
        "Tslash" => keysym::XK_Tslash,
        "rcedilla" => keysym::XK_rcedilla,
        "itilde" => keysym::XK_itilde,
        "lcedilla" => keysym::XK_lcedilla,
        "emacron" => keysym::XK_emacron,
        "gcedilla" => keysym::XK_gcedilla,
        "tslash" => keysym::XK_tslash,
        "ENG" => keysym::XK_ENG,
        "eng" => keysym::XK_eng,
        "Amacron" => keysym::XK_Amacron,
        "Iogonek" => keysym::XK_Iogonek,
        "Eabovedot" => keysym::XK_Eabovedot,
        "Imacron" => keysym::XK_Imacron,
        "Ncedilla" => keysym::XK_Ncedilla,
        "Omacron" => keysym::XK_Omacron,
        "Kcedilla" => keysym::XK_Kcedilla,
        "Uogonek" => keysym::XK_Uogonek,
        "Utilde" => keysym::XK_Utilde,
        "Umacron" => keysym::XK_Umacron,
        "amacron" => keysym::XK_amacron,
        "iogonek" => keysym::XK_iogonek,
        "eabovedot" => keysym::XK_eabovedot,
        "imacron" => keysym::XK_imacron,
        "ncedilla" => keysym::XK_ncedilla,
        "omacron" => keysym::XK_omacron,
        "kcedilla" => keysym::XK_kcedilla,
        "uogonek" => keysym::XK_uogonek,
        "utilde" => keysym::XK_utilde,
        "umacron" => keysym::XK_umacron,
        "overline" => keysym::XK_overline,
        "kana_fullstop" => keysym::XK_kana_fullstop,
        "kana_openingbracket" => keysym::XK_kana_openingbracket,
        "kana_closingbracket" => keysym::XK_kana_closingbracket,
        "kana_comma" => keysym::XK_kana_comma,
        "kana_conjunctive" => keysym::XK_kana_conjunctive,
        "kana_middledot" => keysym::XK_kana_middledot,
        "kana_WO" => keysym::XK_kana_WO,
        "kana_a" => keysym::XK_kana_a,
        "kana_i" => keysym::XK_kana_i,
        "kana_u" => keysym::XK_kana_u,
        "kana_e" => keysym::XK_kana_e,
        "kana_o" => keysym::XK_kana_o,
        "kana_ya" => keysym::XK_kana_ya,
        "kana_yu" => keysym::XK_kana_yu,
        "kana_yo" => keysym::XK_kana_yo,
        "kana_tsu" => keysym::XK_kana_tsu,
        "kana_tu" => keysym::XK_kana_tu,
        "prolongedsound" => keysym::XK_prolongedsound,
        "kana_A" => keysym::XK_kana_A,
        "kana_I" => keysym::XK_kana_I,
        "kana_U" => keysym::XK_kana_U,
        "kana_E" => keysym::XK_kana_E,
        "kana_O" => keysym::XK_kana_O,
        "kana_KA" => keysym::XK_kana_KA,
        "kana_KI" => keysym::XK_kana_KI,
        "kana_KU" => keysym::XK_kana_KU,
        "kana_KE" => keysym::XK_kana_KE,
        "kana_KO" => keysym::XK_kana_KO,
        "kana_SA" => keysym::XK_kana_SA,
        "kana_SHI" => keysym::XK_kana_SHI,
        "kana_SU" => keysym::XK_kana_SU,
        "kana_SE" => keysym::XK_kana_SE,
        "kana_SO" => keysym::XK_kana_SO,
        "kana_TA" => keysym::XK_kana_TA,
        "kana_CHI" => keysym::XK_kana_CHI,
        "kana_TI" => keysym::XK_kana_TI,
        "kana_TSU" => keysym::XK_kana_TSU,
        "kana_TU" => keysym::XK_kana_TU,
        "kana_TE" => keysym::XK_kana_TE,
        "kana_TO" => keysym::XK_kana_TO,
        "kana_NA" => keysym::XK_kana_NA,
        "kana_NI" => keysym::XK_kana_NI,
        "kana_NU" => keysym::XK_kana_NU,
        "kana_NE" => keysym::XK_kana_NE,
        "kana_NO" => keysym::XK_kana_NO,
        "kana_HA" => keysym::XK_kana_HA,
        "kana_HI" => keysym::XK_kana_HI,
        "kana_FU" => keysym::XK_kana_FU,
        "kana_HU" => keysym::XK_kana_HU,
        "kana_HE" => keysym::XK_kana_HE,
        "kana_HO" => keysym::XK_kana_HO,
        "kana_MA" => keysym::XK_kana_MA,
        "kana_MI" => keysym::XK_kana_MI,
        "kana_MU" => keysym::XK_kana_MU,
        "kana_ME" => keysym::XK_kana_ME,
        "kana_MO" => keysym::XK_kana_MO,
        "kana_YA" => keysym::XK_kana_YA,
        "kana_YU" => keysym::XK_kana_YU,
        "kana_YO" => keysym::XK_kana_YO,
        "kana_RA" => keysym::XK_kana_RA,
        "kana_RI" => keysym::XK_kana_RI,
        "kana_RU" => keysym::XK_kana_RU,
        "kana_RE" => keysym::XK_kana_RE,
        "kana_RO" => keysym::XK_kana_RO,
        "kana_WA" => keysym::XK_kana_WA,
        "kana_N" => keysym::XK_kana_N,
        "voicedsound" => keysym::XK_voicedsound,
        "semivoicedsound" => keysym::XK_semivoicedsound,
        "kana_switch" => keysym::XK_kana_switch,
        "Arabic_comma" => keysym::XK_Arabic_comma,
        "Arabic_semicolon" => keysym::XK_Arabic_semicolon,
        "Arabic_question_mark" => keysym::XK_Arabic_question_mark,
        "Arabic_hamza" => keysym::XK_Arabic_hamza,
        "Arabic_maddaonalef" => keysym::XK_Arabic_maddaonalef,
        "Arabic_hamzaonalef" => keysym::XK_Arabic_hamzaonalef,
        "Arabic_hamzaonwaw" => keysym::XK_Arabic_hamzaonwaw,
        "Arabic_hamzaunderalef" => keysym::XK_Arabic_hamzaunderalef,
        "Arabic_hamzaonyeh" => keysym::XK_Arabic_hamzaonyeh,
        "Arabic_alef" => keysym::XK_Arabic_alef,
        "Arabic_beh" => keysym::XK_Arabic_beh,
        "Arabic_tehmarbuta" => keysym::XK_Arabic_tehmarbuta,
        "Arabic_teh" => keysym::XK_Arabic_teh,
        "Arabic_theh" => keysym::XK_Arabic_theh,
        "Arabic_jeem" => keysym::XK_Arabic_jeem,
        "Arabic_hah" => keysym::XK_Arabic_hah,
        "Arabic_khah" => keysym::XK_Arabic_khah,
        "Arabic_dal" => keysym::XK_Arabic_dal,
        "Arabic_thal" => keysym::XK_Arabic_thal,
        "Arabic_ra" => keysym::XK_Arabic_ra,
        "Arabic_zain" => keysym::XK_Arabic_zain,
        "Arabic_seen" => keysym::XK_Arabic_seen,
        "Arabic_sheen" => keysym::XK_Arabic_sheen,
        "Arabic_sad" => keysym::XK_Arabic_sad,
        "Arabic_dad" => keysym::XK_Arabic_dad,
        "Arabic_tah" => keysym::XK_Arabic_tah,
        "Arabic_zah" => keysym::XK_Arabic_zah,
        "Arabic_ain" => keysym::XK_Arabic_ain,
        "Arabic_ghain" => keysym::XK_Arabic_ghain,
        "Arabic_tatweel" => keysym::XK_Arabic_tatweel,
        "Arabic_feh" => keysym::XK_Arabic_feh,
        "Arabic_qaf" => keysym::XK_Arabic_qaf,
        "Arabic_kaf" => keysym::XK_Arabic_kaf,
        "Arabic_lam" => keysym::XK_Arabic_lam,
        "Arabic_meem" => keysym::XK_Arabic_meem,
        "Arabic_noon" => keysym::XK_Arabic_noon,
        "Arabic_ha" => keysym::XK_Arabic_ha,
        "Arabic_heh" => keysym::XK_Arabic_heh,
        "Arabic_waw" => keysym::XK_Arabic_waw,
        "Arabic_alefmaksura" => keysym::XK_Arabic_alefmaksura,
        "Arabic_yeh" => keysym::XK_Arabic_yeh,
        "Arabic_fathatan" => keysym::XK_Arabic_fathatan,
        "Arabic_dammatan" => keysym::XK_Arabic_dammatan,
        "Arabic_kasratan" => keysym::XK_Arabic_kasratan,
        "Arabic_fatha" => keysym::XK_Arabic_fatha,
        "Arabic_damma" => keysym::XK_Arabic_damma,
        "Arabic_kasra" => keysym::XK_Arabic_kasra,
        "Arabic_shadda" => keysym::XK_Arabic_shadda,
        "Arabic_sukun" => keysym::XK_Arabic_sukun,
        "Arabic_switch" => keysym::XK_Arabic_switch,
        "Serbian_dje" => keysym::XK_Serbian_dje,
        "Macedonia_gje" => keysym::XK_Macedonia_gje,
        "Cyrillic_io" => keysym::XK_Cyrillic_io,
        "Ukrainian_ie" => keysym::XK_Ukrainian_ie,
        "Ukranian_je" => keysym::XK_Ukranian_je,
        "Macedonia_dse" => keysym::XK_Macedonia_dse,
        "Ukrainian_i" => keysym::XK_Ukrainian_i,
        "Ukranian_i" => keysym::XK_Ukranian_i,
        "Ukrainian_yi" => keysym::XK_Ukrainian_yi,
        "Ukranian_yi" => keysym::XK_Ukranian_yi,
        "Cyrillic_je" => keysym::XK_Cyrillic_je,
        "Serbian_je" => keysym::XK_Serbian_je,
        "Cyrillic_lje" => keysym::XK_Cyrillic_lje,
        "Serbian_lje" => keysym::XK_Serbian_lje,
        "Cyrillic_nje" => keysym::XK_Cyrillic_nje,
        "Serbian_nje" => keysym::XK_Serbian_nje,
        "Serbian_tshe" => keysym::XK_Serbian_tshe,
        "Macedonia_kje" => keysym::XK_Macedonia_kje,
        "Byelorussian_shortu" => keysym::XK_Byelorussian_shortu,
        "Cyrillic_dzhe" => keysym::XK_Cyrillic_dzhe,
        "Serbian_dze" => keysym::XK_Serbian_dze,
        "numerosign" => keysym::XK_numerosign,
        "Serbian_DJE" => keysym::XK_Serbian_DJE,
        "Macedonia_GJE" => keysym::XK_Macedonia_GJE,
        "Cyrillic_IO" => keysym::XK_Cyrillic_IO,
        "Ukrainian_IE" => keysym::XK_Ukrainian_IE,
        "Ukranian_JE" => keysym::XK_Ukranian_JE,
        "Macedonia_DSE" => keysym::XK_Macedonia_DSE,
        "Ukrainian_I" => keysym::XK_Ukrainian_I,
        "Ukranian_I" => keysym::XK_Ukranian_I,
        "Ukrainian_YI" => keysym::XK_Ukrainian_YI,
        "Ukranian_YI" => keysym::XK_Ukranian_YI,
        "Cyrillic_JE" => keysym::XK_Cyrillic_JE,
        "Serbian_JE" => keysym::XK_Serbian_JE,
        "Cyrillic_LJE" => keysym::XK_Cyrillic_LJE,
        "Serbian_LJE" => keysym::XK_Serbian_LJE,
        "Cyrillic_NJE" => keysym::XK_Cyrillic_NJE,
        "Serbian_NJE" => keysym::XK_Serbian_NJE,
        "Serbian_TSHE" => keysym::XK_Serbian_TSHE,
        "Macedonia_KJE" => keysym::XK_Macedonia_KJE,
        "Byelorussian_SHORTU" => keysym::XK_Byelorussian_SHORTU,
        "Cyrillic_DZHE" => keysym::XK_Cyrillic_DZHE,
        "Serbian_DZE" => keysym::XK_Serbian_DZE,
        "Cyrillic_yu" => keysym::XK_Cyrillic_yu,
        "Cyrillic_a" => keysym::XK_Cyrillic_a,
        "Cyrillic_be" => keysym::XK_Cyrillic_be,
        "Cyrillic_tse" => keysym::XK_Cyrillic_tse,
        "Cyrillic_de" => keysym::XK_Cyrillic_de,
        "Cyrillic_ie" => keysym::XK_Cyrillic_ie,
        "Cyrillic_ef" => keysym::XK_Cyrillic_ef,
        "Cyrillic_ghe" => keysym::XK_Cyrillic_ghe,
        "Cyrillic_ha" => keysym::XK_Cyrillic_ha,
        "Cyrillic_i" => keysym::XK_Cyrillic_i,
        "Cyrillic_shorti" => keysym::XK_Cyrillic_shorti,
        "Cyrillic_ka" => keysym::XK_Cyrillic_ka,
        "Cyrillic_el" => keysym::XK_Cyrillic_el,
        "Cyrillic_em" => keysym::XK_Cyrillic_em,
        "Cyrillic_en" => keysym::XK_Cyrillic_en,
        "Cyrillic_o" => keysym::XK_Cyrillic_o,
        "Cyrillic_pe" => keysym::XK_Cyrillic_pe,
        "Cyrillic_ya" => keysym::XK_Cyrillic_ya,
        "Cyrillic_er" => keysym::XK_Cyrillic_er,
        "Cyrillic_es" => keysym::XK_Cyrillic_es,
        "Cyrillic_te" => keysym::XK_Cyrillic_te,
        "Cyrillic_u" => keysym::XK_Cyrillic_u,
        "Cyrillic_zhe" => keysym::XK_Cyrillic_zhe,
        "Cyrillic_ve" => keysym::XK_Cyrillic_ve,
        "Cyrillic_softsign" => keysym::XK_Cyrillic_softsign,
        "Cyrillic_yeru" => keysym::XK_Cyrillic_yeru,
        "Cyrillic_ze" => keysym::XK_Cyrillic_ze,
        "Cyrillic_sha" => keysym::XK_Cyrillic_sha,
        "Cyrillic_e" => keysym::XK_Cyrillic_e,
        "Cyrillic_shcha" => keysym::XK_Cyrillic_shcha,
        "Cyrillic_che" => keysym::XK_Cyrillic_che,
        "Cyrillic_hardsign" => keysym::XK_Cyrillic_hardsign,
        "Cyrillic_YU" => keysym::XK_Cyrillic_YU,
        "Cyrillic_A" => keysym::XK_Cyrillic_A,
        "Cyrillic_BE" => keysym::XK_Cyrillic_BE,
        "Cyrillic_TSE" => keysym::XK_Cyrillic_TSE,
        "Cyrillic_DE" => keysym::XK_Cyrillic_DE,
        "Cyrillic_IE" => keysym::XK_Cyrillic_IE,
        "Cyrillic_EF" => keysym::XK_Cyrillic_EF,
        "Cyrillic_GHE" => keysym::XK_Cyrillic_GHE,
        "Cyrillic_HA" => keysym::XK_Cyrillic_HA,
        "Cyrillic_I" => keysym::XK_Cyrillic_I,
        "Cyrillic_SHORTI" => keysym::XK_Cyrillic_SHORTI,
        "Cyrillic_KA" => keysym::XK_Cyrillic_KA,
        "Cyrillic_EL" => keysym::XK_Cyrillic_EL,
        "Cyrillic_EM" => keysym::XK_Cyrillic_EM,
        "Cyrillic_EN" => keysym::XK_Cyrillic_EN,
        "Cyrillic_O" => keysym::XK_Cyrillic_O,
        "Cyrillic_PE" => keysym::XK_Cyrillic_PE,
        "Cyrillic_YA" => keysym::XK_Cyrillic_YA,
        "Cyrillic_ER" => keysym::XK_Cyrillic_ER,
        "Cyrillic_ES" => keysym::XK_Cyrillic_ES,
        "Cyrillic_TE" => keysym::XK_Cyrillic_TE,
        "Cyrillic_U" => keysym::XK_Cyrillic_U,
        "Cyrillic_ZHE" => keysym::XK_Cyrillic_ZHE,
        "Cyrillic_VE" => keysym::XK_Cyrillic_VE,
        "Cyrillic_SOFTSIGN" => keysym::XK_Cyrillic_SOFTSIGN,
        "Cyrillic_YERU" => keysym::XK_Cyrillic_YERU,
        "Cyrillic_ZE" => keysym::XK_Cyrillic_ZE,
        "Cyrillic_SHA" => keysym::XK_Cyrillic_SHA,
        "Cyrillic_E" => keysym::XK_Cyrillic_E,
        "Cyrillic_SHCHA" => keysym::XK_Cyrillic_SHCHA,
        "Cyrillic_CHE" => keysym::XK_Cyrillic_CHE,
        "Cyrillic_HARDSIGN" => keysym::XK_Cyrillic_HARDSIGN,
        "Greek_ALPHAaccent" => keysym::XK_Greek_ALPHAaccent,
        "Greek_EPSILONaccent" => keysym::XK_Greek_EPSILONaccent,
        "Greek_ETAaccent" => keysym::XK_Greek_ETAaccent,
        "Greek_IOTAaccent" => keysym::XK_Greek_IOTAaccent,
        "Greek_IOTAdiaeresis" => keysym::XK_Greek_IOTAdiaeresis,
        "Greek_OMICRONaccent" => keysym::XK_Greek_OMICRONaccent,
        "Greek_UPSILONaccent" => keysym::XK_Greek_UPSILONaccent,
        "Greek_UPSILONdieresis" => keysym::XK_Greek_UPSILONdieresis,
        "Greek_OMEGAaccent" => keysym::XK_Greek_OMEGAaccent,
        "Greek_accentdieresis" => keysym::XK_Greek_accentdieresis,
        "Greek_horizbar" => keysym::XK_Greek_horizbar,
        "Greek_alphaaccent" => keysym::XK_Greek_alphaaccent,
        "Greek_epsilonaccent" => keysym::XK_Greek_epsilonaccent,
        "Greek_etaaccent" => keysym::XK_Greek_etaaccent,
        "Greek_iotaaccent" => keysym::XK_Greek_iotaaccent,
        "Greek_iotadieresis" => keysym::XK_Greek_iotadieresis,
        "Greek_iotaaccentdieresis" => keysym::XK_Greek_iotaaccentdieresis,
        "Greek_omicronaccent" => keysym::XK_Greek_omicronaccent,
        "Greek_upsilonaccent" => keysym::XK_Greek_upsilonaccent,
        "Greek_upsilondieresis" => keysym::XK_Greek_upsilondieresis,
        "Greek_upsilonaccentdieresis" => keysym::XK_Greek_upsilonaccentdieresis,
        "Greek_omegaaccent" => keysym::XK_Greek_omegaaccent,
        "Greek_ALPHA" => keysym::XK_Greek_ALPHA,
        "Greek_BETA" => keysym::XK_Greek_BETA,
        "Greek_GAMMA" => keysym::XK_Greek_GAMMA,
        "Greek_DELTA" => keysym::XK_Greek_DELTA,
        "Greek_EPSILON" => keysym::XK_Greek_EPSILON,
        "Greek_ZETA" => keysym::XK_Greek_ZETA,
        "Greek_ETA" => keysym::XK_Greek_ETA,
        "Greek_THETA" => keysym::XK_Greek_THETA,
        "Greek_IOTA" => keysym::XK_Greek_IOTA,
        "Greek_KAPPA" => keysym::XK_Greek_KAPPA,
        "Greek_LAMDA" => keysym::XK_Greek_LAMDA,
        "Greek_LAMBDA" => keysym::XK_Greek_LAMBDA,
        "Greek_MU" => keysym::XK_Greek_MU,
        "Greek_NU" => keysym::XK_Greek_NU,
        "Greek_XI" => keysym::XK_Greek_XI,
        "Greek_OMICRON" => keysym::XK_Greek_OMICRON,
        "Greek_PI" => keysym::XK_Greek_PI,
        "Greek_RHO" => keysym::XK_Greek_RHO,
        "Greek_SIGMA" => keysym::XK_Greek_SIGMA,
        "Greek_TAU" => keysym::XK_Greek_TAU,
        "Greek_UPSILON" => keysym::XK_Greek_UPSILON,
        "Greek_PHI" => keysym::XK_Greek_PHI,
        "Greek_CHI" => keysym::XK_Greek_CHI,
        "Greek_PSI" => keysym::XK_Greek_PSI,
        "Greek_OMEGA" => keysym::XK_Greek_OMEGA,
        "Greek_alpha" => keysym::XK_Greek_alpha,
        "Greek_beta" => keysym::XK_Greek_beta,
        "Greek_gamma" => keysym::XK_Greek_gamma,
        "Greek_delta" => keysym::XK_Greek_delta,
        "Greek_epsilon" => keysym::XK_Greek_epsilon,
        "Greek_zeta" => keysym::XK_Greek_zeta,
        "Greek_eta" => keysym::XK_Greek_eta,
        "Greek_theta" => keysym::XK_Greek_theta,
        "Greek_iota" => keysym::XK_Greek_iota,
        "Greek_kappa" => keysym::XK_Greek_kappa,
        "Greek_lamda" => keysym::XK_Greek_lamda,
        "Greek_lambda" => keysym::XK_Greek_lambda,
        "Greek_mu" => keysym::XK_Greek_mu,
        "Greek_nu" => keysym::XK_Greek_nu,
        "Greek_xi" => keysym::XK_Greek_xi,
        "Greek_omicron" => keysym::XK_Greek_omicron,
        "Greek_pi" => keysym::XK_Greek_pi,
        "Greek_rho" => keysym::XK_Greek_rho,
        "Greek_sigma" => keysym::XK_Greek_sigma,
        "Greek_finalsmallsigma" => keysym::XK_Greek_finalsmallsigma,
        "Greek_tau" => keysym::XK_Greek_tau,
        "Greek_upsilon" => keysym::XK_Greek_upsilon,
        "Greek_phi" => keysym::XK_Greek_phi,
        "Greek_chi" => keysym::XK_Greek_chi,
        "Greek_psi" => keysym::XK_Greek_psi,
        "Greek_omega" => keysym::XK_Greek_omega,
        "Greek_switch" => keysym::XK_Greek_switch,
        "leftradical" => keysym::XK_leftradical,
        "topleftradical" => keysym::XK_topleftradical,
        "horizconnector" => keysym::XK_horizconnector,
        "topintegral" => keysym::XK_topintegral,
        "botintegral" => keysym::XK_botintegral,
        "vertconnector" => keysym::XK_vertconnector,
        "topleftsqbracket" => keysym::XK_topleftsqbracket,
        "botleftsqbracket" => keysym::XK_botleftsqbracket,
        "toprightsqbracket" => keysym::XK_toprightsqbracket,
        "botrightsqbracket" => keysym::XK_botrightsqbracket,
        "topleftparens" => keysym::XK_topleftparens,
        "botleftparens" => keysym::XK_botleftparens,
        "toprightparens" => keysym::XK_toprightparens,
        "botrightparens" => keysym::XK_botrightparens,
        "leftmiddlecurlybrace" => keysym::XK_leftmiddlecurlybrace,
        "rightmiddlecurlybrace" => keysym::XK_rightmiddlecurlybrace,
        "topleftsummation" => keysym::XK_topleftsummation,
        "botleftsummation" => keysym::XK_botleftsummation,
        "topvertsummationconnector" => keysym::XK_topvertsummationconnector,
        "botvertsummationconnector" => keysym::XK_botvertsummationconnector,
        "toprightsummation" => keysym::XK_toprightsummation,
        "botrightsummation" => keysym::XK_botrightsummation,
        "rightmiddlesummation" => keysym::XK_rightmiddlesummation,
        "lessthanequal" => keysym::XK_lessthanequal,
        "notequal" => keysym::XK_notequal,
        "greaterthanequal" => keysym::XK_greaterthanequal,
        "integral" => keysym::XK_integral,
        "therefore" => keysym::XK_therefore,
        "variation" => keysym::XK_variation,
        "infinity" => keysym::XK_infinity,
        "nabla" => keysym::XK_nabla,
        "approximate" => keysym::XK_approximate,
        "similarequal" => keysym::XK_similarequal,
        "ifonlyif" => keysym::XK_ifonlyif,
        "implies" => keysym::XK_implies,
        "identical" => keysym::XK_identical,
        "radical" => keysym::XK_radical,
        "includedin" => keysym::XK_includedin,
        "includes" => keysym::XK_includes,
        "intersection" => keysym::XK_intersection,
        "union" => keysym::XK_union,
        "logicaland" => keysym::XK_logicaland,
        "logicalor" => keysym::XK_logicalor,
        "partialderivative" => keysym::XK_partialderivative,
        "function" => keysym::XK_function,
        "leftarrow" => keysym::XK_leftarrow,
        "uparrow" => keysym::XK_uparrow,
        "rightarrow" => keysym::XK_rightarrow,
        "downarrow" => keysym::XK_downarrow,
        "blank" => keysym::XK_blank,
        "soliddiamond" => keysym::XK_soliddiamond,
        "checkerboard" => keysym::XK_checkerboard,
        "ht" => keysym::XK_ht,
        "ff" => keysym::XK_ff,
        "cr" => keysym::XK_cr,
        "lf" => keysym::XK_lf,
        "nl" => keysym::XK_nl,
        "vt" => keysym::XK_vt,
        "lowrightcorner" => keysym::XK_lowrightcorner,
        "uprightcorner" => keysym::XK_uprightcorner,
        "upleftcorner" => keysym::XK_upleftcorner,
        "lowleftcorner" => keysym::XK_lowleftcorner,
        "crossinglines" => keysym::XK_crossinglines,
        "horizlinescan1" => keysym::XK_horizlinescan1,
        "horizlinescan3" => keysym::XK_horizlinescan3,
        "horizlinescan5" => keysym::XK_horizlinescan5,
        "horizlinescan7" => keysym::XK_horizlinescan7,
        "horizlinescan9" => keysym::XK_horizlinescan9,
        "leftt" => keysym::XK_leftt,
        "rightt" => keysym::XK_rightt,
        "bott" => keysym::XK_bott,
        "topt" => keysym::XK_topt,
        "vertbar" => keysym::XK_vertbar,
        "emspace" => keysym::XK_emspace,
        "enspace" => keysym::XK_enspace,
        "em3space" => keysym::XK_em3space,
        "em4space" => keysym::XK_em4space,
        "digitspace" => keysym::XK_digitspace,
        "punctspace" => keysym::XK_punctspace,
        "thinspace" => keysym::XK_thinspace,
        "hairspace" => keysym::XK_hairspace,
        "emdash" => keysym::XK_emdash,
        "endash" => keysym::XK_endash,
        "signifblank" => keysym::XK_signifblank,
        "ellipsis" => keysym::XK_ellipsis,
        "doubbaselinedot" => keysym::XK_doubbaselinedot,
        "onethird" => keysym::XK_onethird,
        "twothirds" => keysym::XK_twothirds,
        "onefifth" => keysym::XK_onefifth,
        "twofifths" => keysym::XK_twofifths,
        "threefifths" => keysym::XK_threefifths,
        "fourfifths" => keysym::XK_fourfifths,
        "onesixth" => keysym::XK_onesixth,
        "fivesixths" => keysym::XK_fivesixths,
        "careof" => keysym::XK_careof,
        "figdash" => keysym::XK_figdash,
        "leftanglebracket" => keysym::XK_leftanglebracket,
        "decimalpoint" => keysym::XK_decimalpoint,
        "rightanglebracket" => keysym::XK_rightanglebracket,
        "marker" => keysym::XK_marker,
        "oneeighth" => keysym::XK_oneeighth,
        "threeeighths" => keysym::XK_threeeighths,
        "fiveeighths" => keysym::XK_fiveeighths,
        "seveneighths" => keysym::XK_seveneighths,
        "trademark" => keysym::XK_trademark,
        "signaturemark" => keysym::XK_signaturemark,
        "trademarkincircle" => keysym::XK_trademarkincircle,
        "leftopentriangle" => keysym::XK_leftopentriangle,
        "rightopentriangle" => keysym::XK_rightopentriangle,
        "emopencircle" => keysym::XK_emopencircle,
        "emopenrectangle" => keysym::XK_emopenrectangle,
        "leftsinglequotemark" => keysym::XK_leftsinglequotemark,
        "rightsinglequotemark" => keysym::XK_rightsinglequotemark,
        "leftdoublequotemark" => keysym::XK_leftdoublequotemark,
        "rightdoublequotemark" => keysym::XK_rightdoublequotemark,
        "prescription" => keysym::XK_prescription,
        "minutes" => keysym::XK_minutes,
        "seconds" => keysym::XK_seconds,
        "latincross" => keysym::XK_latincross,
        "hexagram" => keysym::XK_hexagram,
        "filledrectbullet" => keysym::XK_filledrectbullet,
        "filledlefttribullet" => keysym::XK_filledlefttribullet,
        "filledrighttribullet" => keysym::XK_filledrighttribullet,
        "emfilledcircle" => keysym::XK_emfilledcircle,
        "emfilledrect" => keysym::XK_emfilledrect,
        "enopencircbullet" => keysym::XK_enopencircbullet,
        "enopensquarebullet" => keysym::XK_enopensquarebullet,
        "openrectbullet" => keysym::XK_openrectbullet,
        "opentribulletup" => keysym::XK_opentribulletup,
        "opentribulletdown" => keysym::XK_opentribulletdown,
        "openstar" => keysym::XK_openstar,
        "enfilledcircbullet" => keysym::XK_enfilledcircbullet,
        "enfilledsqbullet" => keysym::XK_enfilledsqbullet,
        "filledtribulletup" => keysym::XK_filledtribulletup,
        "filledtribulletdown" => keysym::XK_filledtribulletdown,
        "leftpointer" => keysym::XK_leftpointer,
        "rightpointer" => keysym::XK_rightpointer,
        "club" => keysym::XK_club,
        "diamond" => keysym::XK_diamond,
        "heart" => keysym::XK_heart,
        "maltesecross" => keysym::XK_maltesecross,
        "dagger" => keysym::XK_dagger,
        "doubledagger" => keysym::XK_doubledagger,
        "checkmark" => keysym::XK_checkmark,
        "ballotcross" => keysym::XK_ballotcross,
        "musicalsharp" => keysym::XK_musicalsharp,
        "musicalflat" => keysym::XK_musicalflat,
        "malesymbol" => keysym::XK_malesymbol,
        "femalesymbol" => keysym::XK_femalesymbol,
        "telephone" => keysym::XK_telephone,
        "telephonerecorder" => keysym::XK_telephonerecorder,
        "phonographcopyright" => keysym::XK_phonographcopyright,
        "caret" => keysym::XK_caret,
        "singlelowquotemark" => keysym::XK_singlelowquotemark,
        "doublelowquotemark" => keysym::XK_doublelowquotemark,
        "cursor" => keysym::XK_cursor,
        "leftcaret" => keysym::XK_leftcaret,
        "rightcaret" => keysym::XK_rightcaret,
        "downcaret" => keysym::XK_downcaret,
        "upcaret" => keysym::XK_upcaret,
        "overbar" => keysym::XK_overbar,
        "downtack" => keysym::XK_downtack,
        "upshoe" => keysym::XK_upshoe,
        "downstile" => keysym::XK_downstile,
        "underbar" => keysym::XK_underbar,
        "jot" => keysym::XK_jot,
        "quad" => keysym::XK_quad,
        "uptack" => keysym::XK_uptack,
        "circle" => keysym::XK_circle,
        "upstile" => keysym::XK_upstile,
        "downshoe" => keysym::XK_downshoe,
        "rightshoe" => keysym::XK_rightshoe,
        "leftshoe" => keysym::XK_leftshoe,
        "lefttack" => keysym::XK_lefttack,
        "righttack" => keysym::XK_righttack,
        "hebrew_doublelowline" => keysym::XK_hebrew_doublelowline,
        "hebrew_aleph" => keysym::XK_hebrew_aleph,
        "hebrew_bet" => keysym::XK_hebrew_bet,
        "hebrew_beth" => keysym::XK_hebrew_beth,
        "hebrew_gimel" => keysym::XK_hebrew_gimel,
        "hebrew_gimmel" => keysym::XK_hebrew_gimmel,
        "hebrew_dalet" => keysym::XK_hebrew_dalet,
        "hebrew_daleth" => keysym::XK_hebrew_daleth,
        "hebrew_he" => keysym::XK_hebrew_he,
        "hebrew_waw" => keysym::XK_hebrew_waw,
        "hebrew_zain" => keysym::XK_hebrew_zain,
        "hebrew_zayin" => keysym::XK_hebrew_zayin,
        "hebrew_chet" => keysym::XK_hebrew_chet,
        "hebrew_het" => keysym::XK_hebrew_het,
        "hebrew_tet" => keysym::XK_hebrew_tet,
        "hebrew_teth" => keysym::XK_hebrew_teth,
        "hebrew_yod" => keysym::XK_hebrew_yod,
        "hebrew_finalkaph" => keysym::XK_hebrew_finalkaph,
        "hebrew_kaph" => keysym::XK_hebrew_kaph,
        "hebrew_lamed" => keysym::XK_hebrew_lamed,
        "hebrew_finalmem" => keysym::XK_hebrew_finalmem,
        "hebrew_mem" => keysym::XK_hebrew_mem,
        "hebrew_finalnun" => keysym::XK_hebrew_finalnun,
        "hebrew_nun" => keysym::XK_hebrew_nun,
        "hebrew_samech" => keysym::XK_hebrew_samech,
        "hebrew_samekh" => keysym::XK_hebrew_samekh,
        "hebrew_ayin" => keysym::XK_hebrew_ayin,
        "hebrew_finalpe" => keysym::XK_hebrew_finalpe,
        "hebrew_pe" => keysym::XK_hebrew_pe,
        "hebrew_finalzade" => keysym::XK_hebrew_finalzade,
        "hebrew_finalzadi" => keysym::XK_hebrew_finalzadi,
        "hebrew_zade" => keysym::XK_hebrew_zade,
        "hebrew_zadi" => keysym::XK_hebrew_zadi,
        "hebrew_qoph" => keysym::XK_hebrew_qoph,
        "hebrew_kuf" => keysym::XK_hebrew_kuf,
        "hebrew_resh" => keysym::XK_hebrew_resh,
        "hebrew_shin" => keysym::XK_hebrew_shin,
        "hebrew_taw" => keysym::XK_hebrew_taw,
        "hebrew_taf" => keysym::XK_hebrew_taf,
        "Hebrew_switch" => keysym::XK_Hebrew_switch,
        "XF86ModeLock" => keysym::XF86XK_ModeLock,
        "XF86MonBrightnessUp" => keysym::XF86XK_MonBrightnessUp,
        "XF86MonBrightnessDown" => keysym::XF86XK_MonBrightnessDown,
        "XF86KbdLightOnOff" => keysym::XF86XK_KbdLightOnOff,
        "XF86KbdBrightnessUp" => keysym::XF86XK_KbdBrightnessUp,
        "XF86KbdBrightnessDown" => keysym::XF86XK_KbdBrightnessDown,
        "XF86Standby" => keysym::XF86XK_Standby,
        "XF86AudioLowerVolume" => keysym::XF86XK_AudioLowerVolume,
        "XF86AudioMute" => keysym::XF86XK_AudioMute,
        "XF86AudioRaiseVolume" => keysym::XF86XK_AudioRaiseVolume,
        "XF86AudioPlay" => keysym::XF86XK_AudioPlay,
        "XF86AudioStop" => keysym::XF86XK_AudioStop,
        "XF86AudioPrev" => keysym::XF86XK_AudioPrev,
        "XF86AudioNext" => keysym::XF86XK_AudioNext,
        "XF86HomePage" => keysym::XF86XK_HomePage,
        "XF86Mail" => keysym::XF86XK_Mail,
        "XF86Start" => keysym::XF86XK_Start,
        "XF86Search" => keysym::XF86XK_Search,
        "XF86AudioRecord" => keysym::XF86XK_AudioRecord,
        "XF86Calculator" => keysym::XF86XK_Calculator,
        "XF86Memo" => keysym::XF86XK_Memo,
        "XF86ToDoList" => keysym::XF86XK_ToDoList,
        "XF86Calendar" => keysym::XF86XK_Calendar,
        "XF86PowerDown" => keysym::XF86XK_PowerDown,
        "XF86ContrastAdjust" => keysym::XF86XK_ContrastAdjust,
        "XF86RockerUp" => keysym::XF86XK_RockerUp,
        "XF86RockerDown" => keysym::XF86XK_RockerDown,
        "XF86RockerEnter" => keysym::XF86XK_RockerEnter,
        "XF86Back" => keysym::XF86XK_Back,
        "XF86Forward" => keysym::XF86XK_Forward,
        "XF86Stop" => keysym::XF86XK_Stop,
        "XF86Refresh" => keysym::XF86XK_Refresh,
        "XF86PowerOff" => keysym::XF86XK_PowerOff,
        "XF86WakeUp" => keysym::XF86XK_WakeUp,
        "XF86Eject" => keysym::XF86XK_Eject,
        "XF86ScreenSaver" => keysym::XF86XK_ScreenSaver,
        "XF86WWW" => keysym::XF86XK_WWW,
        "XF86Sleep" => keysym::XF86XK_Sleep,
        "XF86Favorites" => keysym::XF86XK_Favorites,
        "XF86AudioPause" => keysym::XF86XK_AudioPause,
        "XF86AudioMedia" => keysym::XF86XK_AudioMedia,
        "XF86MyComputer" => keysym::XF86XK_MyComputer,
        "XF86VendorHome" => keysym::XF86XK_VendorHome,
        "XF86LightBulb" => keysym::XF86XK_LightBulb,
        "XF86Shop" => keysym::XF86XK_Shop,
        "XF86History" => keysym::XF86XK_History,
        "XF86OpenURL" => keysym::XF86XK_OpenURL,
        "XF86AddFavorite" => keysym::XF86XK_AddFavorite,
        "XF86HotLinks" => keysym::XF86XK_HotLinks,
        "XF86BrightnessAdjust" => keysym::XF86XK_BrightnessAdjust,
        "XF86Finance" => keysym::XF86XK_Finance,
        "XF86Community" => keysym::XF86XK_Community,
        "XF86AudioRewind" => keysym::XF86XK_AudioRewind,
        "XF86BackForward" => keysym::XF86XK_BackForward,
        "XF86Launch0" => keysym::XF86XK_Launch0,
        "XF86Launch1" => keysym::XF86XK_Launch1,
        "XF86Launch2" => keysym::XF86XK_Launch2,
        "XF86Launch3" => keysym::XF86XK_Launch3,
        "XF86Launch4" => keysym::XF86XK_Launch4,
        "XF86Launch5" => keysym::XF86XK_Launch5,
        "XF86Launch6" => keysym::XF86XK_Launch6,
        "XF86Launch7" => keysym::XF86XK_Launch7,
        "XF86Launch8" => keysym::XF86XK_Launch8,
        "XF86Launch9" => keysym::XF86XK_Launch9,
        "XF86LaunchA" => keysym::XF86XK_LaunchA,
        "XF86LaunchB" => keysym::XF86XK_LaunchB,
        "XF86LaunchC" => keysym::XF86XK_LaunchC,
        "XF86LaunchD" => keysym::XF86XK_LaunchD,
        "XF86LaunchE" => keysym::XF86XK_LaunchE,
        "XF86LaunchF" => keysym::XF86XK_LaunchF,
        "XF86ApplicationLeft" => keysym::XF86XK_ApplicationLeft,
        "XF86ApplicationRight" => keysym::XF86XK_ApplicationRight,
        "XF86Book" => keysym::XF86XK_Book,
        "XF86CD" => keysym::XF86XK_CD,
        "XF86Calculater" => keysym::XF86XK_Calculater,
        "XF86Clear" => keysym::XF86XK_Clear,
        "XF86Close" => keysym::XF86XK_Close,
        "XF86Copy" => keysym::XF86XK_Copy,
        "XF86Cut" => keysym::XF86XK_Cut,
        "XF86Display" => keysym::XF86XK_Display,
        "XF86DOS" => keysym::XF86XK_DOS,
        "XF86Documents" => keysym::XF86XK_Documents,
        "XF86Excel" => keysym::XF86XK_Excel,
        "XF86Explorer" => keysym::XF86XK_Explorer,
        "XF86Game" => keysym::XF86XK_Game,
        "XF86Go" => keysym::XF86XK_Go,
        "XF86iTouch" => keysym::XF86XK_iTouch,
        "XF86LogOff" => keysym::XF86XK_LogOff,
        "XF86Market" => keysym::XF86XK_Market,
        "XF86Meeting" => keysym::XF86XK_Meeting,
        "XF86MenuKB" => keysym::XF86XK_MenuKB,
        "XF86MenuPB" => keysym::XF86XK_MenuPB,
        "XF86MySites" => keysym::XF86XK_MySites,
        "XF86New" => keysym::XF86XK_New,
        "XF86News" => keysym::XF86XK_News,
        "XF86OfficeHome" => keysym::XF86XK_OfficeHome,
        "XF86Open" => keysym::XF86XK_Open,
        "XF86Option" => keysym::XF86XK_Option,
        "XF86Paste" => keysym::XF86XK_Paste,
        "XF86Phone" => keysym::XF86XK_Phone,
        "XF86Q" => keysym::XF86XK_Q,
        "XF86Reply" => keysym::XF86XK_Reply,
        "XF86Reload" => keysym::XF86XK_Reload,
        "XF86RotateWindows" => keysym::XF86XK_RotateWindows,
        "XF86RotationPB" => keysym::XF86XK_RotationPB,
        "XF86RotationKB" => keysym::XF86XK_RotationKB,
        "XF86Save" => keysym::XF86XK_Save,
        "XF86ScrollUp" => keysym::XF86XK_ScrollUp,
        "XF86ScrollDown" => keysym::XF86XK_ScrollDown,
        "XF86ScrollClick" => keysym::XF86XK_ScrollClick,
        "XF86Send" => keysym::XF86XK_Send,
        "XF86Spell" => keysym::XF86XK_Spell,
        "XF86SplitScreen" => keysym::XF86XK_SplitScreen,
        "XF86Support" => keysym::XF86XK_Support,
        "XF86TaskPane" => keysym::XF86XK_TaskPane,
        "XF86Terminal" => keysym::XF86XK_Terminal,
        "XF86Tools" => keysym::XF86XK_Tools,
        "XF86Travel" => keysym::XF86XK_Travel,
        "XF86UserPB" => keysym::XF86XK_UserPB,
        "XF86User1KB" => keysym::XF86XK_User1KB,
        "XF86User2KB" => keysym::XF86XK_User2KB,
        "XF86Video" => keysym::XF86XK_Video,
        "XF86WheelButton" => keysym::XF86XK_WheelButton,
        "XF86Word" => keysym::XF86XK_Word,
        "XF86Xfer" => keysym::XF86XK_Xfer,
        "XF86ZoomIn" => keysym::XF86XK_ZoomIn,
        "XF86ZoomOut" => keysym::XF86XK_ZoomOut,
        "XF86Away" => keysym::XF86XK_Away,
        "XF86Messenger" => keysym::XF86XK_Messenger,
        "XF86WebCam" => keysym::XF86XK_WebCam,
        "XF86MailForward" => keysym::XF86XK_MailForward,
        "XF86Pictures" => keysym::XF86XK_Pictures,
        "XF86Music" => keysym::XF86XK_Music,
        "XF86Battery" => keysym::XF86XK_Battery,
        "XF86Bluetooth" => keysym::XF86XK_Bluetooth,
        "XF86WLAN" => keysym::XF86XK_WLAN,
        "XF86UWB" => keysym::XF86XK_UWB,
        "XF86AudioForward" => keysym::XF86XK_AudioForward,
        "XF86AudioRepeat" => keysym::XF86XK_AudioRepeat,
        "XF86AudioRandomPlay" => keysym::XF86XK_AudioRandomPlay,
        "XF86Subtitle" => keysym::XF86XK_Subtitle,
        "XF86AudioCycleTrack" => keysym::XF86XK_AudioCycleTrack,
        "XF86CycleAngle" => keysym::XF86XK_CycleAngle,
        "XF86FrameBack" => keysym::XF86XK_FrameBack,
        "XF86FrameForward" => keysym::XF86XK_FrameForward,
        "XF86Time" => keysym::XF86XK_Time,
        "XF86Select" => keysym::XF86XK_Select,
        "XF86View" => keysym::XF86XK_View,
        "XF86TopMenu" => keysym::XF86XK_TopMenu,
        "XF86Red" => keysym::XF86XK_Red,
        "XF86Green" => keysym::XF86XK_Green,
        "XF86Yellow" => keysym::XF86XK_Yellow,
        "XF86Blue" => keysym::XF86XK_Blue,
        "XF86Suspend" => keysym::XF86XK_Suspend,
        "XF86Hibernate" => keysym::XF86XK_Hibernate,
        "XF86TouchpadToggle" => keysym::XF86XK_TouchpadToggle,
        "XF86TouchpadOn" => keysym::XF86XK_TouchpadOn,
        "XF86TouchpadOff" => keysym::XF86XK_TouchpadOff,
        "XF86AudioMicMute" => keysym::XF86XK_AudioMicMute,
        "XF86Switch_VT_1" => keysym::XF86XK_Switch_VT_1,
        "XF86Switch_VT_2" => keysym::XF86XK_Switch_VT_2,
        "XF86Switch_VT_3" => keysym::XF86XK_Switch_VT_3,
        "XF86Switch_VT_4" => keysym::XF86XK_Switch_VT_4,
        "XF86Switch_VT_5" => keysym::XF86XK_Switch_VT_5,
        "XF86Switch_VT_6" => keysym::XF86XK_Switch_VT_6,
        "XF86Switch_VT_7" => keysym::XF86XK_Switch_VT_7,
        "XF86Switch_VT_8" => keysym::XF86XK_Switch_VT_8,
        "XF86Switch_VT_9" => keysym::XF86XK_Switch_VT_9,
        "XF86Switch_VT_10" => keysym::XF86XK_Switch_VT_10,
        "XF86Switch_VT_11" => keysym::XF86XK_Switch_VT_11,
        "XF86Switch_VT_12" => keysym::XF86XK_Switch_VT_12,
        "XF86Ungrab" => keysym::XF86XK_Ungrab,
        "XF86ClearGrab" => keysym::XF86XK_ClearGrab,
        "XF86Next_VMode" => keysym::XF86XK_Next_VMode,
        "XF86Prev_VMode" => keysym::XF86XK_Prev_VMode,
        "XF86LogWindowTree" => keysym::XF86XK_LogWindowTree,
        "XF86LogGrabInfo" => keysym::XF86XK_LogGrabInfo,
        "ISO_Lock" => keysym::XK_ISO_Lock,
        "ISO_Level2_Latch" => keysym::XK_ISO_Level2_Latch,
        "ISO_Level3_Shift" => keysym::XK_ISO_Level3_Shift,
        "ISO_Level3_Latch" => keysym::XK_ISO_Level3_Latch,
        "ISO_Level3_Lock" => keysym::XK_ISO_Level3_Lock,
        "ISO_Level5_Shift" => keysym::XK_ISO_Level5_Shift,
        "ISO_Level5_Latch" => keysym::XK_ISO_Level5_Latch,
        "ISO_Level5_Lock" => keysym::XK_ISO_Level5_Lock,
        "ISO_Group_Shift" => keysym::XK_ISO_Group_Shift,
        "ISO_Group_Latch" => keysym::XK_ISO_Group_Latch,
        "ISO_Group_Lock" => keysym::XK_ISO_Group_Lock,
        "ISO_Next_Group" => keysym::XK_ISO_Next_Group,
        "ISO_Next_Group_Lock" => keysym::XK_ISO_Next_Group_Lock,
        "ISO_Prev_Group" => keysym::XK_ISO_Prev_Group,
        "ISO_Prev_Group_Lock" => keysym::XK_ISO_Prev_Group_Lock,
        "ISO_First_Group" => keysym::XK_ISO_First_Group,
        "ISO_First_Group_Lock" => keysym::XK_ISO_First_Group_Lock,
        "ISO_Last_Group" => keysym::XK_ISO_Last_Group,
        "ISO_Last_Group_Lock" => keysym::XK_ISO_Last_Group_Lock,
        "ISO_Left_Tab" => keysym::XK_ISO_Left_Tab,
        "ISO_Move_Line_Up" => keysym::XK_ISO_Move_Line_Up,
        "ISO_Move_Line_Down" => keysym::XK_ISO_Move_Line_Down,
        "ISO_Partial_Line_Up" => keysym::XK_ISO_Partial_Line_Up,
        "ISO_Partial_Line_Down" => keysym::XK_ISO_Partial_Line_Down,
        "ISO_Partial_Space_Left" => keysym::XK_ISO_Partial_Space_Left,
        "ISO_Partial_Space_Right" => keysym::XK_ISO_Partial_Space_Right,
        "ISO_Set_Margin_Left" => keysym::XK_ISO_Set_Margin_Left,
        "ISO_Set_Margin_Right" => keysym::XK_ISO_Set_Margin_Right,
        "ISO_Release_Margin_Left" => keysym::XK_ISO_Release_Margin_Left,
        "ISO_Release_Margin_Right" => keysym::XK_ISO_Release_Margin_Right,
        "ISO_Release_Both_Margins" => keysym::XK_ISO_Release_Both_Margins,
        "ISO_Fast_Cursor_Left" => keysym::XK_ISO_Fast_Cursor_Left,
        "ISO_Fast_Cursor_Right" => keysym::XK_ISO_Fast_Cursor_Right,
        "ISO_Fast_Cursor_Up" => keysym::XK_ISO_Fast_Cursor_Up,
        "ISO_Fast_Cursor_Down" => keysym::XK_ISO_Fast_Cursor_Down,
        "ISO_Continuous_Underline" => keysym::XK_ISO_Continuous_Underline,
        "ISO_Discontinuous_Underline" => keysym::XK_ISO_Discontinuous_Underline,
        "ISO_Emphasize" => keysym::XK_ISO_Emphasize,
        "ISO_Center_Object" => keysym::XK_ISO_Center_Object,
        "ISO_Enter" => keysym::XK_ISO_Enter,
        "dead_grave" => keysym::XK_dead_grave,
        "dead_acute" => keysym::XK_dead_acute,
        "dead_circumflex" => keysym::XK_dead_circumflex,
        "dead_tilde" => keysym::XK_dead_tilde,
        "dead_perispomeni" => keysym::XK_dead_perispomeni,
        "dead_macron" => keysym::XK_dead_macron,
        "dead_breve" => keysym::XK_dead_breve,
        "dead_abovedot" => keysym::XK_dead_abovedot,
        "dead_diaeresis" => keysym::XK_dead_diaeresis,
        "dead_abovering" => keysym::XK_dead_abovering,
        "dead_doubleacute" => keysym::XK_dead_doubleacute,
        "dead_caron" => keysym::XK_dead_caron,
        "dead_cedilla" => keysym::XK_dead_cedilla,
        "dead_ogonek" => keysym::XK_dead_ogonek,
        "dead_iota" => keysym::XK_dead_iota,
        "dead_voiced_sound" => keysym::XK_dead_voiced_sound,
        "dead_semivoiced_sound" => keysym::XK_dead_semivoiced_sound,
        "dead_belowdot" => keysym::XK_dead_belowdot,
        "dead_hook" => keysym::XK_dead_hook,
        "dead_horn" => keysym::XK_dead_horn,
        "dead_stroke" => keysym::XK_dead_stroke,
        "dead_abovecomma" => keysym::XK_dead_abovecomma,
        "dead_psili" => keysym::XK_dead_psili,
        "dead_abovereversedcomma" => keysym::XK_dead_abovereversedcomma,
        "dead_dasia" => keysym::XK_dead_dasia,
        "dead_doublegrave" => keysym::XK_dead_doublegrave,
        "dead_belowring" => keysym::XK_dead_belowring,
        "dead_belowmacron" => keysym::XK_dead_belowmacron,
        "dead_belowcircumflex" => keysym::XK_dead_belowcircumflex,
        "dead_belowtilde" => keysym::XK_dead_belowtilde,
        "dead_belowbreve" => keysym::XK_dead_belowbreve,
        "dead_belowdiaeresis" => keysym::XK_dead_belowdiaeresis,
        "dead_invertedbreve" => keysym::XK_dead_invertedbreve,
        "dead_belowcomma" => keysym::XK_dead_belowcomma,
        "dead_currency" => keysym::XK_dead_currency,
        "dead_lowline" => keysym::XK_dead_lowline,
        "dead_aboveverticalline" => keysym::XK_dead_aboveverticalline,
        "dead_belowverticalline" => keysym::XK_dead_belowverticalline,
        "dead_longsolidusoverlay" => keysym::XK_dead_longsolidusoverlay,
        "dead_a" => keysym::XK_dead_a,
        "dead_A" => keysym::XK_dead_A,
        "dead_e" => keysym::XK_dead_e,
        "dead_E" => keysym::XK_dead_E,
        "dead_i" => keysym::XK_dead_i,
        "dead_I" => keysym::XK_dead_I,
        "dead_o" => keysym::XK_dead_o,
        "dead_O" => keysym::XK_dead_O,
        "dead_u" => keysym::XK_dead_u,
        "dead_U" => keysym::XK_dead_U,
        "dead_small_schwa" => keysym::XK_dead_small_schwa,
        "dead_capital_schwa" => keysym::XK_dead_capital_schwa,
        "dead_greek" => keysym::XK_dead_greek,
        "First_Virtual_Screen" => keysym::XK_First_Virtual_Screen,
        "Prev_Virtual_Screen" => keysym::XK_Prev_Virtual_Screen,
        "Next_Virtual_Screen" => keysym::XK_Next_Virtual_Screen,
        "Last_Virtual_Screen" => keysym::XK_Last_Virtual_Screen,
        "Terminate_Server" => keysym::XK_Terminate_Server,
        "AccessX_Enable" => keysym::XK_AccessX_Enable,
        "AccessX_Feedback_Enable" => keysym::XK_AccessX_Feedback_Enable,
        "RepeatKeys_Enable" => keysym::XK_RepeatKeys_Enable,
        "SlowKeys_Enable" => keysym::XK_SlowKeys_Enable,
        "BounceKeys_Enable" => keysym::XK_BounceKeys_Enable,
        "StickyKeys_Enable" => keysym::XK_StickyKeys_Enable,
        "MouseKeys_Enable" => keysym::XK_MouseKeys_Enable,
        "MouseKeys_Accel_Enable" => keysym::XK_MouseKeys_Accel_Enable,
        "Overlay1_Enable" => keysym::XK_Overlay1_Enable,
        "Overlay2_Enable" => keysym::XK_Overlay2_Enable,
        "AudibleBell_Enable" => keysym::XK_AudibleBell_Enable,
        "Pointer_Left" => keysym::XK_Pointer_Left,
        "Pointer_Right" => keysym::XK_Pointer_Right,
        "Pointer_Up" => keysym::XK_Pointer_Up,
        "Pointer_Down" => keysym::XK_Pointer_Down,
        "Pointer_UpLeft" => keysym::XK_Pointer_UpLeft,
        "Pointer_UpRight" => keysym::XK_Pointer_UpRight,
        "Pointer_DownLeft" => keysym::XK_Pointer_DownLeft,
        "Pointer_DownRight" => keysym::XK_Pointer_DownRight,
        "Pointer_Button_Dflt" => keysym::XK_Pointer_Button_Dflt,
        "Pointer_Button1" => keysym::XK_Pointer_Button1,
        "Pointer_Button2" => keysym::XK_Pointer_Button2,
        "Pointer_Button3" => keysym::XK_Pointer_Button3,
        "Pointer_Button4" => keysym::XK_Pointer_Button4,
        "Pointer_Button5" => keysym::XK_Pointer_Button5,
        "Pointer_DblClick_Dflt" => keysym::XK_Pointer_DblClick_Dflt,
        "Pointer_DblClick1" => keysym::XK_Pointer_DblClick1,
        "Pointer_DblClick2" => keysym::XK_Pointer_DblClick2,
        "Pointer_DblClick3" => keysym::XK_Pointer_DblClick3,
        "Pointer_DblClick4" => keysym::XK_Pointer_DblClick4,
        "Pointer_DblClick5" => keysym::XK_Pointer_DblClick5,
        "Pointer_Drag_Dflt" => keysym::XK_Pointer_Drag_Dflt,
        "Pointer_Drag1" => keysym::XK_Pointer_Drag1,
        "Pointer_Drag2" => keysym::XK_Pointer_Drag2,
        "Pointer_Drag3" => keysym::XK_Pointer_Drag3,
        "Pointer_Drag4" => keysym::XK_Pointer_Drag4,
        "Pointer_Drag5" => keysym::XK_Pointer_Drag5,
        "Pointer_EnableKeys" => keysym::XK_Pointer_EnableKeys,
        "Pointer_Accelerate" => keysym::XK_Pointer_Accelerate,
        "Pointer_DfltBtnNext" => keysym::XK_Pointer_DfltBtnNext,
        "Pointer_DfltBtnPrev" => keysym::XK_Pointer_DfltBtnPrev,
        "ch" => keysym::XK_ch,
        "Ch" => keysym::XK_Ch,
        "CH" => keysym::XK_CH,
        "c_h" => keysym::XK_c_h,
        "C_h" => keysym::XK_C_h,
        "C_H" => keysym::XK_C_H,
        _ => return None,
    };
    Some(sym)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits_map_to_their_keysyms() {
        assert_eq!(into_keysym("q"), Some(keysym::XK_q));
        assert_eq!(into_keysym("Q"), Some(keysym::XK_q));
        assert_eq!(into_keysym("0"), Some(keysym::XK_0));
        assert_eq!(into_keysym("9"), Some(keysym::XK_9));
    }

    #[test]
    fn named_keys_are_resolved() {
        assert_eq!(into_keysym("Return"), Some(keysym::XK_Return));
        assert_eq!(into_keysym("Enter"), Some(keysym::XK_Return));
        assert_eq!(into_keysym("Tab"), Some(keysym::XK_Tab));
        assert_eq!(into_keysym("F12"), Some(keysym::XK_F12));
        assert_eq!(
            into_keysym("XF86AudioMute"),
            Some(keysym::XF86XK_AudioMute)
        );
    }

    #[test]
    fn punctuation_and_navigation_keys_are_resolved() {
        let keys = [
            ("comma", keysym::XK_comma),
            ("period", keysym::XK_period),
            ("minus", keysym::XK_minus),
            ("equal", keysym::XK_equal),
            ("slash", keysym::XK_slash),
            ("bracketleft", keysym::XK_bracketleft),
            ("grave", keysym::XK_grave),
            ("Page_Up", keysym::XK_Page_Up),
            ("Insert", keysym::XK_Insert),
            ("F13", keysym::XK_F13),
        ];
        for (name, sym) in keys {
            assert_eq!(into_keysym(name), Some(sym), "{name}");
        }
    }

    #[test]
    fn unknown_keys_do_not_resolve() {
        assert_eq!(into_keysym(""), None);
        assert_eq!(into_keysym("NotAKey"), None);
        assert_eq!(into_keysym("é"), None);
    }
}
