//! Embedded target word list
//!
//! The raw list as shipped, uppercase. Entries that are not exactly five
//! letters are filtered out when the [`WordList`](super::WordList) is built,
//! so they can never be selected as targets.

/// Raw target word candidates (unfiltered)
pub const WORDS: &[&str] = &[
    "ABADI", "AKUAT", "ALAMI", "AMPUH", "ANGIN", "ANJAK", "ASING",
    "AKUAT", "BALIK", "BANGSA", "BANTU", "BARAT", "BARIS", "BASUH",
    "BATAS", "BAWAH", "BAYAR", "BELAJAR", "BENAR", "BENDA", "BENTUK",
    "BERANI", "BERITA", "BESAR", "BETUL", "BIDANG", "BIKIN", "BINTANG",
    "BISMI", "BISA", "BUKAN", "BUKU", "BULAN", "BUMI", "BURUK",
    "CABANG", "CANTIK", "CARI", "CATAT", "CEPAT", "CERITA", "CINTA",
    "CITA", "CUKUP", "DAERAH", "DAGANG", "DAHSYAT", "DAHULU", "DAKWAH",
    "DALAM", "DANAU", "DASAR", "DATANG", "DAUN", "DEKAT", "DENGAN",
    "DESA", "DIAM", "DINGIN", "DIRI", "DOA", "DUA", "DUNIA",
    "EKOR", "FIKIR", "GAGAL", "GAMBAR", "GANTI", "GARAM", "GELAP",
    "GEMA", "GERAK", "GIGI", "GILA", "GOLONG", "GUNUNG", "HABIS",
    "HADIR", "HAJAT", "HALUS", "HAMPIR", "HANGAT", "HANYA", "HARAP",
    "HARI", "HATI", "HAWA", "HERAN", "HIDUP", "HILANG", "HITAM",
    "HORMAT", "HUJAN", "IBU", "IKAN", "ILMU", "IMAN", "INGAT",
    "INJIL", "ISI", "ISTRI", "JADI", "JAGA", "JAHAT", "JAJAN",
    "JALAN", "JAMAN", "JANGAN", "JANTUNG", "JARAK", "JARUM", "JASA",
    "JATUH", "JAUH", "JEJAK", "JELAS", "JEMPUT", "JENIS", "JERUK",
    "JIHAD", "JUGA", "JUMAT", "JUMLAH", "JUTA", "KABAR", "KACANG",
    "KADANG", "KAIN", "KAJIAN", "KAKAK", "KALAU", "KALIMAT", "KAMAR",
    "KAMI", "KANAN", "KANTOR", "KAPAL", "KAPAN", "KARENA", "KATA",
    "KAYA", "KEBAIKAN", "KEBUN", "KECIL", "KEDUA", "KEGIATAN", "KEHIDUPAN",
    "KEJADIAN", "KEKASIH", "KELAS", "KELUAR", "KEMBALI", "KEMUDIAN", "KENAL",
    "KEPALA", "KERETA", "KERJA", "KERUSAKAN", "KETIKA", "KETURUNAN", "KHUSUS",
    "KIRI", "KISAH", "KITA", "KOMPUTER", "KOTA", "KUAT", "KUCING",
    "KUNCI", "LAGI", "LAHIR", "LAIN", "LAJU", "LAKI", "LAMA",
    "LANGIT", "LAPANG", "LAPOR", "LARI", "LATAR", "LATIH", "LAUT",
    "LEBAR", "LEBIH", "LELAKI", "LEMAH", "LENGKAP", "LETAK", "LIHAT",
    "LIMPAH", "LINTAS", "LUAR", "LUAS", "LUKA", "LULUS", "MAAF",
    "MABUK", "MADU", "MAHKOTA", "MAKAN", "MAKNA", "MALAM", "MALU",
    "MAMPU", "MANDI", "MANFAAT", "MANUSIA", "MASALAH", "MASIH", "MASUK",
    "MATA", "MATI", "MAU", "MEDIA", "MELIHAT", "MEMANG", "MEMBACA",
    "MEMBERI", "MEMILIKI", "MEMUKUL", "MENAATI", "MENANG", "MENANTI", "MENCARI",
    "MENDAPAT", "MENGAJAR", "MENJADI", "MENONTON", "MENTAL", "MENTARI", "MENUNGGU",
    "MENURUT", "MERAH", "MEREKA", "MESIN", "MINUM", "MISAL", "MODERN",
    "MOHON", "MOTOR", "MUDA", "MUDAH", "MUJIZAT", "MULAI", "MULIA",
    "MURAH", "MURID", "MUSIM", "NAIK", "NAMA", "NANTI", "NASIB",
    "NEGARA", "NIKAH", "NILAI", "NOMOR", "NYATA", "NYAWA", "OBAT",
    "ORANG", "PADA", "PAHALA", "PAHAM", "PAKAI", "PAKSA", "PALING",
    "PANAS", "PANDAI", "PANGGIL", "PANJANG", "PANTAS", "PARA", "PARKIR",
    "PARTI", "PASAR", "PASIR", "PATUH", "PASTI", "PATAH", "PAYUNG",
    "PEDANG", "PEGANG", "PEKERJAAN", "PELAJAR", "PELAN", "PELANGI", "PELUK",
    "PEMBACA", "PENA", "PENDEK", "PENUH", "PERANG", "PERCAYA", "PERGI",
    "PERHATIAN", "PERLU", "PERMATA", "PERMISI", "PERNAH", "PERPUSTAKAAN", "PESAN",
    "PESAWAT", "PETANI", "PIKIR", "PINDAH", "PINTAR", "PINTU", "PISAU",
    "POHON", "POKOK", "POLISI", "PULANG", "PUNYA", "PUTIH", "PUTRA",
    "RAHASIA", "RAJA", "RAKIT", "RAMAI", "RAPI", "RASA", "RATUS",
    "RAWA", "RAYA", "RELA", "RENDAH", "RENUNG", "RIBU", "RINDU",
    "RODA", "ROHANI", "RUMAH", "RUPIAH", "RUSA", "SAAT", "SABAR",
    "SABDA", "SABTU", "SAHABAT", "SAJA", "SAKIT", "SALAH", "SALAM",
    "SAMA", "SAMPAI", "SANGAT", "SANTRI", "SAPU", "SARAPAN", "SATU",
    "SAUDARA", "SAYA", "SAYANG", "SEBAB", "SEBELAH", "SEBENAR", "SEDANG",
    "SEDAP", "SEDIH", "SEGALA", "SEGERA", "SEHAT", "SEJAHTERA", "SEJARAH",
    "SEKARANG", "SEKOLAH", "SELALU", "SELAMAT", "SELANJUT", "SELASA", "SELESAI",
    "SELURUH", "SEMANGAT", "SEMBAH", "SEMESTA", "SEMUA", "SENANG", "SENDIRI",
    "SENI", "SENJATA", "SENTUH", "SEPASANG", "SEPEDA", "SERATUS", "SERIBU",
    "SERU", "SESUAI", "SESUATU", "SETIAP", "SIANG", "SIBUK", "SIDANG",
    "SIHAT", "SIKAP", "SILA", "SIMPAN", "SINAR", "SINGGAT", "SIAPA",
    "SISA", "SISTEM", "SITU", "SUARA", "SUDAH", "SUKAR", "SUKA",
    "SUKSES", "SULIT", "SUMPAH", "SUNGAI", "SURAT", "SURGA", "SUSAH",
    "SUSU", "TABUNG", "TADI", "TAHUN", "TAHU", "TAKUT", "TAMAN",
    "TAMPIL", "TANAH", "TANDA", "TANGAN", "TANGGAL", "TANGGUNG", "TANPA",
    "TAPI", "TARUH", "TAS", "TAWAR", "TEKAN", "TEKNIK", "TEKS",
    "TELAH", "TELAPAK", "TELUR", "TEMAN", "TEMBAK", "TEMA", "TEMPAT",
    "TENANG", "TENDA", "TENGAH", "TENTANG", "TENTARA", "TENTU", "TENUN",
    "TERANG", "TERIMA", "TERLALU", "TERUS", "TETAP", "TETAPI", "TIANG",
    "TIDAK", "TIDUR", "TIAP", "TIKET", "TIMBUL", "TIMUR", "TINGGI",
    "TINGKAT", "TIPU", "TITIK", "TITIP", "TOLONG", "TOPI", "TUAN",
    "TUJUH", "TUJUAN", "TULANG", "TULIS", "TUMBUH", "TURUN", "TUTUP",
    "UANG", "UJIAN", "UKUR", "ULANG", "UMAT", "UMUM", "UNDANG",
    "UNTUK", "UPAYA", "URUS", "USAHA", "UTAMA", "UTARA", "WAKTU",
    "WALAU", "WANITA", "WARGA", "WARIS", "WARNA", "WATAK", "WAYANG",
    "YAKIN", "YANG", "ZAMAN",
];
